use crate::utils::error::Result;

/// Byte-level access to where content tables live.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ContentProvider: Send + Sync {
    /// Directory holding `<table>.json` files, or `None` for the compiled-in content.
    fn content_dir(&self) -> Option<&str>;
    /// Use compiled-in content for tables missing from `content_dir`.
    fn fallback_to_builtin(&self) -> bool;
    fn output_path(&self) -> &str;
}

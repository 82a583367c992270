use crate::domain::model::Table;
use crate::domain::ports::Storage;
use crate::utils::error::{ContentError, Result};
use std::path::PathBuf;

/// Reads and writes table files under a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

const COUNTRIES: &str = include_str!("../../content/countries.json");
const SECTORS: &str = include_str!("../../content/sectors.json");
const OVERRIDES: &str = include_str!("../../content/overrides.json");
const OCCUPATIONS: &str = include_str!("../../content/occupations.json");
const SKILLS: &str = include_str!("../../content/skills.json");
const VENTURES: &str = include_str!("../../content/ventures.json");
const PATHWAYS: &str = include_str!("../../content/pathways.json");

/// The content tables compiled into the binary. Read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStorage;

impl EmbeddedStorage {
    pub fn document(table: Table) -> &'static str {
        match table {
            Table::Countries => COUNTRIES,
            Table::Sectors => SECTORS,
            Table::Overrides => OVERRIDES,
            Table::Occupations => OCCUPATIONS,
            Table::Skills => SKILLS,
            Table::Ventures => VENTURES,
            Table::Pathways => PATHWAYS,
        }
    }
}

impl Storage for EmbeddedStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Table::ALL
            .iter()
            .find(|table| table.file_name() == path)
            .map(|&table| Self::document(table).as_bytes().to_vec())
            .ok_or_else(|| {
                ContentError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("No built-in table named {}", path),
                ))
            })
    }

    async fn write_file(&self, path: &str, _data: &[u8]) -> Result<()> {
        Err(ContentError::ReadOnlyStorage {
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage_round_trips_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("nested/out.json", b"{}").await.unwrap();
        let data = storage.read_file("nested/out.json").await.unwrap();
        assert_eq!(data, b"{}");

        let missing = storage.read_file("absent.json").await.unwrap_err();
        assert!(matches!(missing, ContentError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_embedded_storage_is_read_only() {
        let storage = EmbeddedStorage;
        let data = storage.read_file("sectors.json").await.unwrap();
        assert!(!data.is_empty());

        assert!(storage.read_file("unknown.json").await.is_err());
        assert!(matches!(
            storage.write_file("sectors.json", b"{}").await,
            Err(ContentError::ReadOnlyStorage { .. })
        ));
    }
}

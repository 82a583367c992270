use crate::core::export::ExportFormat;
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSettings {
    /// Directory with `<table>.json` files. Omit to use the built-in content.
    pub dir: Option<String>,
    pub fallback_to_builtin: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSettings {
    pub output_path: Option<String>,
    pub formats: Option<Vec<String>>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContentError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContentError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn export_formats(&self) -> Vec<ExportFormat> {
        self.export
            .formats
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|name| ExportFormat::from_name(name))
            .collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.content.dir {
            validate_path("content.dir", dir)?;
        }
        if let Some(output) = &self.export.output_path {
            validate_path("export.output_path", output)?;
        }
        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }
        for format in self.export.formats.iter().flatten() {
            validate_one_of("export.formats", format, &ExportFormat::NAMES)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[content]
dir = "./content"
fallback_to_builtin = true

[logging]
level = "debug"
format = "json"

[export]
output_path = "./export"
formats = ["json", "csv"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.content.dir.as_deref(), Some("./content"));
        assert_eq!(config.content.fallback_to_builtin, Some(true));
        assert_eq!(
            config.export_formats(),
            vec![ExportFormat::Json, ExportFormat::Csv]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.content.dir.is_none());
        assert!(config.export_formats().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAREERS_ATLAS_TEST_DIR", "/srv/careers");

        let config = TomlConfig::from_toml_str(
            r#"
[content]
dir = "${CAREERS_ATLAS_TEST_DIR}"
"#,
        )
        .unwrap();
        assert_eq!(config.content.dir.as_deref(), Some("/srv/careers"));

        std::env::remove_var("CAREERS_ATLAS_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[export]
formats = ["json", "xml"]
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ContentError::InvalidConfigValueError { ref field, .. }) if field == "export.formats"
        ));

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[export]\noutput_path = \"./out\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.export.output_path.as_deref(), Some("./out"));
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::export::ExportFormat;
use crate::core::ContentProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "./export";

/// Settings after layering command-line flags over the TOML file.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub content_dir: Option<String>,
    pub fallback_to_builtin: bool,
    pub output_path: String,
    pub export_formats: Vec<ExportFormat>,
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            fallback_to_builtin: false,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            export_formats: vec![ExportFormat::Json],
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        let formats = file.export_formats();
        Self {
            content_dir: file.content.dir.clone(),
            fallback_to_builtin: file.content.fallback_to_builtin.unwrap_or(false),
            output_path: file
                .export
                .output_path
                .clone()
                .unwrap_or(defaults.output_path),
            export_formats: if formats.is_empty() {
                defaults.export_formats
            } else {
                formats
            },
            log_level: file.logging.level.clone().unwrap_or(defaults.log_level),
            json_logs: file.logging.format.as_deref() == Some("json"),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut config = Self::from_toml(&file);
        if cli.content_dir.is_some() {
            config.content_dir = cli.content_dir.clone();
        }
        config.fallback_to_builtin |= cli.fallback_to_builtin;
        config.json_logs |= cli.json_logs;
        if cli.verbose {
            config.log_level = "debug".to_string();
        }

        if let cli::Command::Export { output, formats } = &cli.command {
            if let Some(output) = output {
                config.output_path = output.clone();
            }
            if !formats.is_empty() {
                for name in formats {
                    crate::utils::validation::validate_one_of(
                        "--formats",
                        name,
                        &ExportFormat::NAMES,
                    )?;
                }
                config.export_formats = formats
                    .iter()
                    .filter_map(|name| ExportFormat::from_name(name))
                    .collect();
            }
        }

        config.validate()?;
        Ok(config)
    }
}

impl ContentProvider for RuntimeConfig {
    fn content_dir(&self) -> Option<&str> {
        self.content_dir.as_deref()
    }

    fn fallback_to_builtin(&self) -> bool {
        self.fallback_to_builtin
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for RuntimeConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.content_dir {
            validate_path("content_dir", dir)?;
        }
        validate_path("output_path", &self.output_path)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_config_file() {
        let cli = cli::CliConfig::parse_from(["careers-atlas", "countries"]);
        let config = RuntimeConfig::from_cli(&cli).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn test_cli_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[content]
dir = "/from/file"

[logging]
format = "json"

[export]
output_path = "/file/out"
formats = ["zip"]
"#,
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = cli::CliConfig::parse_from([
            "careers-atlas",
            "--config",
            path,
            "export",
            "--output",
            "/cli/out",
        ]);
        let config = RuntimeConfig::from_cli(&cli).unwrap();

        assert_eq!(config.content_dir(), Some("/from/file"));
        assert_eq!(config.output_path(), "/cli/out");
        assert_eq!(config.export_formats, vec![ExportFormat::Zip]);
        assert!(config.json_logs);
    }

    #[test]
    fn test_file_log_level_reaches_compact_filter() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[logging]\nlevel = \"debug\"\n").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = cli::CliConfig::parse_from(["careers-atlas", "--config", path, "audit"]);
        let config = RuntimeConfig::from_cli(&cli).unwrap();

        assert!(!config.json_logs);
        assert_eq!(config.log_level, "debug");
        assert!(crate::utils::logger::level_filter(&config.log_level)
            .to_string()
            .contains("careers_atlas=debug"));
    }

    #[test]
    fn test_verbose_flag_raises_file_level() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[logging]\nlevel = \"warn\"\n").unwrap();
        let path = file.path().to_str().unwrap();

        let cli =
            cli::CliConfig::parse_from(["careers-atlas", "--config", path, "--verbose", "audit"]);
        assert_eq!(RuntimeConfig::from_cli(&cli).unwrap().log_level, "debug");
    }

    #[test]
    fn test_unknown_export_format_is_rejected() {
        let cli = cli::CliConfig::parse_from(["careers-atlas", "export", "--formats", "json,pdf"]);
        assert!(RuntimeConfig::from_cli(&cli).is_err());
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid sector: '{value}' (expected agriculture, energy or digital)")]
    InvalidSector { value: String },

    #[error("Unknown country: '{value}'")]
    InvalidCountry { value: String },

    #[error("Failed to parse table '{table}': {source}")]
    TableParseError {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Content validation failed in {table} at '{key}': {reason}")]
    ContentValidationError {
        table: String,
        key: String,
        reason: String,
    },

    #[error("Storage is read-only, cannot write '{path}'")]
    ReadOnlyStorage { path: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Content,
    Storage,
    Export,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ContentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContentError::InvalidSector { .. } | ContentError::InvalidCountry { .. } => {
                ErrorCategory::Input
            }
            ContentError::TableParseError { .. } | ContentError::ContentValidationError { .. } => {
                ErrorCategory::Content
            }
            ContentError::ReadOnlyStorage { .. } | ContentError::IoError(_) => {
                ErrorCategory::Storage
            }
            ContentError::ZipError(_)
            | ContentError::CsvError(_)
            | ContentError::SerializationError(_) => ErrorCategory::Export,
            ContentError::ConfigError { .. }
            | ContentError::MissingConfigError { .. }
            | ContentError::InvalidConfigValueError { .. }
            | ContentError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Content => ErrorSeverity::Critical,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Export => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ContentError::InvalidSector { .. } => {
                "Use one of: agriculture (or agri), energy, digital".to_string()
            }
            ContentError::InvalidCountry { .. } => {
                "Run `careers-atlas countries` to list known countries, or use \"all\"".to_string()
            }
            ContentError::TableParseError { table, .. } => format!(
                "Check that {}.json is valid JSON and matches the expected table shape",
                table
            ),
            ContentError::ContentValidationError { table, .. } => {
                format!("Fix the offending entry in {}.json and reload", table)
            }
            ContentError::ReadOnlyStorage { .. } => {
                "Export to a local directory with --output".to_string()
            }
            ContentError::IoError(_) => {
                "Check that the content directory exists and is readable".to_string()
            }
            ContentError::ZipError(_) | ContentError::CsvError(_) => {
                "Check free disk space and write permissions for the output path".to_string()
            }
            ContentError::SerializationError(_) => {
                "Re-run with --verbose to see which record failed to serialize".to_string()
            }
            ContentError::ConfigError { .. }
            | ContentError::MissingConfigError { .. }
            | ContentError::InvalidConfigValueError { .. }
            | ContentError::ConfigValidationError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid request: {}", self),
            ErrorCategory::Content => format!("Content tables are malformed: {}", self),
            ErrorCategory::Storage => format!("Could not access content storage: {}", self),
            ErrorCategory::Export => format!("Export failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

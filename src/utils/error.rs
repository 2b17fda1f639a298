use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input for '{field}' ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        QuoteError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        QuoteError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::ValidationError { .. }
            | QuoteError::JsonError(_)
            | QuoteError::CsvError(_) => ErrorCategory::Input,
            QuoteError::ConfigError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::TomlParseError(_) => ErrorCategory::Configuration,
            QuoteError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::ValidationError { field, reason, .. } => {
                format!("The move specification is invalid: {} {}", field, reason)
            }
            QuoteError::InvalidConfigValueError { field, reason, .. } => {
                format!("The rate configuration is invalid: {} {}", field, reason)
            }
            QuoteError::ConfigError { message } => format!("Configuration problem: {}", message),
            QuoteError::TomlParseError(_) => "The TOML file could not be parsed".to_string(),
            QuoteError::JsonError(_) => "The JSON input could not be parsed".to_string(),
            QuoteError::CsvError(_) => "The CSV batch could not be read or written".to_string(),
            QuoteError::IoError(e) => format!("File access failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the move specification fields and their ranges",
            ErrorCategory::Configuration => "Check the rate card TOML and command line arguments",
            ErrorCategory::System => "Check that the file exists and is readable/writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

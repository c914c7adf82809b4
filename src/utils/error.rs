use crate::domain::model::{ExportFormat, InputSlot};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriftError {
    #[error("Unrecognized format in {slot}: {reason} (columns found: {found})")]
    UnrecognizedFormat {
        slot: InputSlot,
        found: String,
        reason: String,
    },

    #[error("The {slot} looks like a {format} export but is missing the '{column}' column")]
    MissingColumn {
        slot: InputSlot,
        format: ExportFormat,
        column: String,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip operation failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者可自行修正的錯誤
    High,
    /// 系統層級錯誤
    Critical,
}

impl DriftError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DriftError::UnrecognizedFormat { .. }
            | DriftError::MissingColumn { .. }
            | DriftError::Csv(_) => ErrorCategory::Input,
            DriftError::InvalidConfigValue { .. }
            | DriftError::MissingConfig { .. }
            | DriftError::ConfigValidation { .. } => ErrorCategory::Configuration,
            DriftError::Io(_) | DriftError::Zip(_) | DriftError::Serialization(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DriftError::UnrecognizedFormat { .. } | DriftError::MissingColumn { .. } => {
                self.to_string()
            }
            DriftError::Csv(e) => format!("One of the input files could not be read as CSV: {}", e),
            DriftError::InvalidConfigValue { .. }
            | DriftError::MissingConfig { .. }
            | DriftError::ConfigValidation { .. } => format!("Configuration problem: {}", self),
            DriftError::Io(e) => format!("File access failed: {}", e),
            DriftError::Zip(_) | DriftError::Serialization(_) => {
                format!("Writing the report failed: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DriftError::UnrecognizedFormat { .. } => {
                "Provide one LinkedIn export (First Name, Last Name) and one Bullhorn export (Naam, Huidige functietitel)"
            }
            DriftError::MissingColumn { .. } => {
                "Re-export the file with all columns selected (for Bullhorn use the CSV_Export column set)"
            }
            DriftError::Csv(_) => "Check that both files are comma, semicolon or tab separated text files",
            DriftError::InvalidConfigValue { .. } | DriftError::ConfigValidation { .. } => {
                "Fix the value on the command line or in the TOML configuration file"
            }
            DriftError::MissingConfig { .. } => {
                "Pass --first and --second, or set them under [inputs] in the configuration file"
            }
            DriftError::Io(_) => "Check that the paths exist and are readable/writable",
            DriftError::Zip(_) | DriftError::Serialization(_) => {
                "Check free disk space in the output directory and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DriftError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Book not found: {title}")]
    NotFoundError { title: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Validation,
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

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::NotFoundError { .. } => ErrorCategory::Lookup,
            CatalogError::ValidationError { .. } => ErrorCategory::Validation,
            CatalogError::ConfigError { .. } | CatalogError::TomlError(_) => {
                ErrorCategory::Configuration
            }
            CatalogError::IoError(_) | CatalogError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Drives the CLI exit code: Low exits 0, Medium 2, High 1, Critical 3.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::NotFoundError { .. } => {
                "Check the exact title with `list` or `search`; titles are case-sensitive"
            }
            CatalogError::ValidationError { .. } => "Use a rating between 0 and 5",
            CatalogError::ConfigError { .. } | CatalogError::TomlError(_) => {
                "Fix the catalog config file and run again"
            }
            CatalogError::IoError(_) => "Make sure the file exists and is readable",
            CatalogError::SerializationError(_) => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::NotFoundError { title } => format!("No book titled \"{}\"", title),
            CatalogError::ValidationError { reason, .. } => reason.clone(),
            CatalogError::ConfigError { message } => format!("Bad configuration: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_recoverable() {
        let not_found = CatalogError::NotFoundError {
            title: "Hujan".to_string(),
        };
        assert_eq!(not_found.category(), ErrorCategory::Lookup);
        assert_eq!(not_found.severity(), ErrorSeverity::Medium);
        assert_eq!(not_found.to_string(), "Book not found: Hujan");

        let invalid = CatalogError::ValidationError {
            field: "rating".to_string(),
            value: "6".to_string(),
            reason: "Rating must be between 0 and 5".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Validation);
        assert_eq!(invalid.user_friendly_message(), "Rating must be between 0 and 5");
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: CatalogError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}

// SafetyBoard - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
//
// Deliberately absent: colour parsing and deleting an unknown incident id
// are fail-soft operations and never produce an error value.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SafetyBoard operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SafetyBoardError {
    /// A submitted incident form failed validation.
    Validation(ValidationError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Export of visible incidents failed.
    Export(ExportError),
}

impl fmt::Display for SafetyBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for SafetyBoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Errors raised by the report form before an incident reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or contains only whitespace.
    MissingField { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "required field '{field}' is empty")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for SafetyBoardError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The config file is larger than the accepted maximum.
    FileTooLarge { path: PathBuf, size: u64, max_size: u64 },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Config '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for SafetyBoardError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to exporting the visible incident list.
#[derive(Debug)]
pub enum ExportError {
    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },

    /// Flushing the underlying writer failed.
    Io { source: io::Error },

    /// The exported bytes were not valid UTF-8 (clipboard text only).
    Encoding { source: std::string::FromUtf8Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Encoding { source } => write!(f, "Export produced invalid text: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
            Self::Io { source } => Some(source),
            Self::Encoding { source } => Some(source),
        }
    }
}

impl From<ExportError> for SafetyBoardError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for SafetyBoard results.
pub type Result<T> = std::result::Result<T, SafetyBoardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_validation_error_display_names_field() {
        let e = ValidationError::MissingField { field: "title" };
        assert_eq!(e.to_string(), "required field 'title' is empty");
    }

    #[test]
    fn test_top_level_error_preserves_source() {
        let e: SafetyBoardError = ValidationError::MissingField {
            field: "description",
        }
        .into();
        assert!(e.to_string().starts_with("Validation error:"));
        assert!(e.source().is_some());
    }
}

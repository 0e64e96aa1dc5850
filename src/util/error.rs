// X3dPrefs - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Absent preference keys are never errors; reads fall back to defaults.
// These types cover persistence, configuration, and value conversion.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors related to the on-disk preference document.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// JSON (de)serialisation failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document was written by an incompatible schema version.
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "Malformed preference file '{}': {source}", path.display())
            }
            Self::VersionMismatch {
                path,
                found,
                expected,
            } => write!(
                f,
                "Preference file '{}' has version {found}, expected {expected}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::VersionMismatch { .. } => None,
        }
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

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
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

// ---------------------------------------------------------------------------
// Value errors
// ---------------------------------------------------------------------------

/// Errors converting a stored or typed preference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A form field does not hold a finite floating-point number.
    NotNumeric { label: String, value: String },

    /// A stored value that must be a whole number is not one.
    NotInteger { key: String, value: String },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric { label, value } => {
                write!(f, "'{label}' must be a number, got '{value}'")
            }
            Self::NotInteger { key, value } => {
                write!(f, "'{key}' must be a whole number, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ValueError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_store_io_error_keeps_source_chain() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/preferences.json"),
            operation: "write",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("write"), "got: {msg}");
        assert!(msg.contains("preferences.json"), "got: {msg}");
        assert!(err.source().is_some(), "io::Error must stay in the chain");
    }

    #[test]
    fn test_config_parse_error_names_file() {
        let source = toml::from_str::<toml::Value>("[ui\n").unwrap_err();
        let err = ConfigError::TomlParse {
            path: PathBuf::from("/home/user/.config/config.toml"),
            source,
        };
        assert!(err.to_string().contains("config.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_value_error_names_offending_field() {
        let err = ValueError::NotNumeric {
            label: "Absolute scale factor".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'Absolute scale factor' must be a number, got 'abc'"
        );
    }
}

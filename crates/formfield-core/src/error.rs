//! Error types for the Formfield core library
//!
//! All failures are construction-time failures: a converter that was
//! built successfully never raises during conversion. Missing handlers,
//! unmatched patterns, and unresolved placeholders are policy fallbacks
//! handled inside the conversion path, not errors.

use thiserror::Error;

/// Main error type for Formfield operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration document has an unsupported or inconsistent shape
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A pattern-list entry's regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error from a message
    pub fn configuration<M: Into<String>>(message: M) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = Error::configuration("unsupported configuration shape: number");
        assert_eq!(
            err.to_string(),
            "Configuration error: unsupported configuration shape: number"
        );
    }

    #[test]
    fn test_pattern_error_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::Pattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid pattern '('"));
    }

    #[test]
    fn test_json_error_conversion() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = source.into();
        assert!(matches!(err, Error::Json { .. }));
    }
}

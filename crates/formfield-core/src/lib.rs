//! Formfield Core - conversion engine for validation-failure reports
//!
//! This crate turns a validation-failure report (a list of per-field
//! error details with a path, a default message, a machine error kind,
//! and a context of named values) into a flat map from field path to a
//! human-presentable message, so form-rendering code never has to know
//! the validation library's internal message format.
//!
//! # Main Components
//!
//! - **Context Substitution**: expand `${name}` placeholders from a
//!   detail's context ([`substitute`])
//! - **Conversion Strategies**: pass-through, fixed template,
//!   prioritized pattern list, or per-type handlers, selected once at
//!   construction ([`ConversionStrategy`])
//! - **Report Conversion**: assemble the field error map in plain or
//!   structured output format ([`ReportConverter`])
//! - **Configuration**: build a strategy from a JSON/YAML document's
//!   shape ([`ConversionStrategy::from_config`])
//!
//! # Example
//!
//! ```
//! use formfield_core::{ConversionStrategy, ErrorDetail, ReportConverter, ValidationReport};
//!
//! let report = ValidationReport::new(vec![ErrorDetail::new(
//!     "password",
//!     "\"password\" length must be at least 2 characters long",
//!     "string.min",
//! )
//! .with_context("key", "password")
//! .with_context("limit", 2)]);
//!
//! let converter = ReportConverter::plain(ConversionStrategy::FixedTemplate(
//!     "\"${key}\" must be ${limit} or more chars.".to_string(),
//! ));
//!
//! let errors = converter.convert(&report).expect("report carries details");
//! assert_eq!(
//!     errors["password"].message(),
//!     "\"password\" must be 2 or more chars.",
//! );
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod strategy;
pub mod substitute;
pub mod types;

// Re-export main types for convenience
pub use config::{strategy_from_json, strategy_from_yaml};
pub use converter::ReportConverter;
pub use error::{Error, Result};
pub use strategy::{
    type_handler, ConversionStrategy, MatchPattern, PatternEntry, TypeHandler,
};
pub use substitute::substitute;
pub use types::{
    Context, ContextValue, ErrorDetail, FieldError, FieldErrorMap, FieldErrorRecord,
    OutputFormat, ValidationReport, VALIDATOR_ERROR_NAME,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_end_to_end_plain_conversion() {
        let report = ValidationReport::new(vec![ErrorDetail::new(
            "name",
            "\"name\" is required",
            "any.required",
        )]);
        let converter = ReportConverter::plain(ConversionStrategy::default());
        let errors = converter.convert(&report).unwrap();
        assert_eq!(errors["name"].message(), "\"name\" is required");
    }

    #[test]
    fn test_converter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportConverter>();
        assert_send_sync::<ConversionStrategy>();
    }
}

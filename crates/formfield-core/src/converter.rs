//! Report conversion: from a validation report to a field error map
//!
//! A [`ReportConverter`] owns its strategy and output format for its
//! entire lifetime. Conversion is a pure, synchronous, single pass over
//! the report's detail list; the same converter may be invoked
//! concurrently without coordination.

use crate::error::Result;
use crate::strategy::ConversionStrategy;
use crate::types::{
    FieldError, FieldErrorMap, FieldErrorRecord, OutputFormat, ValidationReport,
};
use serde_json::Value;

/// Converts validation reports into field error maps
#[derive(Debug)]
pub struct ReportConverter {
    strategy: ConversionStrategy,
    format: OutputFormat,
}

impl ReportConverter {
    /// Create a converter from a strategy and an output format
    pub fn new(strategy: ConversionStrategy, format: OutputFormat) -> Self {
        Self { strategy, format }
    }

    /// Create a converter producing bare message strings
    pub fn plain(strategy: ConversionStrategy) -> Self {
        Self::new(strategy, OutputFormat::Plain)
    }

    /// Create a converter producing structured field error records
    pub fn structured(strategy: ConversionStrategy) -> Self {
        Self::new(strategy, OutputFormat::Structured)
    }

    /// Create a converter from a dynamic configuration document
    ///
    /// The strategy is selected from the document's shape once, here;
    /// see [`ConversionStrategy::from_config`].
    pub fn from_config(config: &Value, format: OutputFormat) -> Result<Self> {
        Ok(Self::new(ConversionStrategy::from_config(config)?, format))
    }

    /// The strategy this converter was built with
    pub fn strategy(&self) -> &ConversionStrategy {
        &self.strategy
    }

    /// The output format this converter was built with
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Convert a report into a map from field path to field error
    ///
    /// Returns `None` when the report carries no `details` list; that
    /// is the sentinel for "input was not a validation-error report",
    /// distinct from the empty map an empty details list produces.
    /// Details are visited in order and written at their `path`, so a
    /// later detail sharing a path overwrites an earlier one.
    pub fn convert(&self, report: &ValidationReport) -> Option<FieldErrorMap> {
        let details = report.details.as_ref()?;

        let mut errors = FieldErrorMap::with_capacity(details.len());
        for detail in details {
            let message = self.strategy.convert(detail);
            let error = match self.format {
                OutputFormat::Plain => FieldError::Message(message),
                OutputFormat::Structured => FieldError::Record(FieldErrorRecord::new(
                    message,
                    detail.path.clone(),
                    detail.kind.clone(),
                )),
            };
            errors.insert(detail.path.clone(), error);
        }
        Some(errors)
    }
}

//! Construction of conversion strategies from configuration documents
//!
//! The conversion behavior is selected from the configuration
//! document's shape exactly once, at construction, and produces an
//! explicit [`ConversionStrategy`]:
//!
//! | Document shape | Strategy |
//! |---|---|
//! | null | `PassThrough` |
//! | string | `FixedTemplate` |
//! | array of entries | `PatternList` |
//! | object of `type -> template` | `TypeMap` |
//!
//! Any other shape (number, boolean) is rejected with a configuration
//! error. Array entries carry a `template` (alias `message`) and
//! exactly one of `pattern` (literal substring match) or `regex`
//! (compiled regular expression).

use crate::error::{Error, Result};
use crate::strategy::{ConversionStrategy, MatchPattern, PatternEntry, TypeHandler};
use crate::types::Context;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Serde shape of one pattern-list configuration entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternEntryConfig {
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default)]
    regex: Option<String>,
    #[serde(alias = "message")]
    template: String,
}

impl PatternEntryConfig {
    fn into_entry(self) -> Result<PatternEntry> {
        let pattern = match (self.pattern, self.regex) {
            (Some(text), None) => MatchPattern::Substring(text),
            (None, Some(source)) => {
                let regex = Regex::new(&source).map_err(|err| Error::Pattern {
                    pattern: source,
                    source: err,
                })?;
                MatchPattern::Regex(regex)
            }
            _ => {
                return Err(Error::configuration(
                    "pattern entry must set exactly one of 'pattern' and 'regex'",
                ))
            }
        };
        Ok(PatternEntry {
            pattern,
            template: self.template,
        })
    }
}

impl ConversionStrategy {
    /// Select a strategy from a configuration document's shape
    pub fn from_config(config: &Value) -> Result<Self> {
        let strategy = match config {
            Value::Null => ConversionStrategy::PassThrough,
            Value::String(template) => ConversionStrategy::FixedTemplate(template.clone()),
            Value::Array(entries) => {
                let entries = entries
                    .iter()
                    .map(|entry| {
                        let parsed: PatternEntryConfig =
                            serde_json::from_value(entry.clone())?;
                        parsed.into_entry()
                    })
                    .collect::<Result<Vec<_>>>()?;
                ConversionStrategy::PatternList(entries)
            }
            Value::Object(templates) => {
                let mut handlers: HashMap<String, TypeHandler> =
                    HashMap::with_capacity(templates.len());
                for (kind, template) in templates {
                    let template = template
                        .as_str()
                        .ok_or_else(|| {
                            Error::configuration(format!(
                                "template for type '{}' must be a string",
                                kind
                            ))
                        })?
                        .to_string();
                    handlers.insert(
                        kind.clone(),
                        Box::new(move |_: &Context| Some(template.clone())) as TypeHandler,
                    );
                }
                ConversionStrategy::TypeMap(handlers)
            }
            other => {
                return Err(Error::configuration(format!(
                    "unsupported configuration shape: {}",
                    json_kind(other)
                )))
            }
        };

        log::debug!("configured conversion strategy: {:?}", strategy);
        Ok(strategy)
    }
}

/// Parse a JSON configuration document into a strategy
pub fn strategy_from_json(content: &str) -> Result<ConversionStrategy> {
    let config: Value = serde_json::from_str(content)?;
    ConversionStrategy::from_config(&config)
}

/// Parse a YAML configuration document into a strategy
pub fn strategy_from_yaml(content: &str) -> Result<ConversionStrategy> {
    let config: serde_yaml::Value = serde_yaml::from_str(content)?;
    let config = serde_json::to_value(config)?;
    ConversionStrategy::from_config(&config)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

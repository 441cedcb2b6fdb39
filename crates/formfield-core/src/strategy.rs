//! Conversion strategies for turning an error detail into its message
//!
//! The strategy is selected exactly once, at converter construction,
//! from the shape of the caller-supplied configuration. Each variant is
//! a pure function of a single detail; nothing is mutated during
//! conversion and every fallback keeps the detail's own message.

use crate::substitute::substitute;
use crate::types::{Context, ErrorDetail};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Handler invoked with a detail's context to produce a candidate
/// template, or `None` to fall through to the detail's own message
pub type TypeHandler = Box<dyn Fn(&Context) -> Option<String> + Send + Sync>;

/// Box a closure into a [`TypeHandler`]
pub fn type_handler<F>(handler: F) -> TypeHandler
where
    F: Fn(&Context) -> Option<String> + Send + Sync + 'static,
{
    Box::new(handler)
}

/// How a pattern-list entry matches a detail's message
#[derive(Debug, Clone)]
pub enum MatchPattern {
    /// Matches when the message contains this text
    Substring(String),
    /// Matches when searching the message with this expression succeeds
    Regex(Regex),
}

impl MatchPattern {
    /// Check this pattern against a detail's message
    pub fn matches(&self, message: &str) -> bool {
        match self {
            MatchPattern::Substring(text) => message.contains(text.as_str()),
            MatchPattern::Regex(regex) => regex.is_match(message),
        }
    }
}

/// One prioritized entry of a pattern-list strategy
#[derive(Debug, Clone)]
pub struct PatternEntry {
    /// Pattern checked against the detail's default message
    pub pattern: MatchPattern,
    /// Template substituted with the detail's context when matched
    pub template: String,
}

impl PatternEntry {
    /// Create an entry matching on a literal substring
    pub fn substring<P, T>(pattern: P, template: T) -> Self
    where
        P: Into<String>,
        T: Into<String>,
    {
        Self {
            pattern: MatchPattern::Substring(pattern.into()),
            template: template.into(),
        }
    }

    /// Create an entry matching with a compiled regular expression
    pub fn regex<T: Into<String>>(pattern: &str, template: T) -> crate::Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| crate::Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: MatchPattern::Regex(regex),
            template: template.into(),
        })
    }
}

/// The algorithm mapping a detail to its final message
///
/// Selected once per converter and immutable for its lifetime. All
/// variants are `Send + Sync`, so one converter instance may be shared
/// across threads without coordination.
#[derive(Default)]
pub enum ConversionStrategy {
    /// Keep each detail's own message, no substitution
    #[default]
    PassThrough,
    /// Every detail receives the same template, substituted with its
    /// own context
    FixedTemplate(String),
    /// First entry whose pattern matches the detail's message wins;
    /// list order is a priority order, not exhaustive matching
    PatternList(Vec<PatternEntry>),
    /// Per-error-kind handlers keyed by the detail's `type` identifier
    TypeMap(HashMap<String, TypeHandler>),
}

impl ConversionStrategy {
    /// Produce the final message for one detail
    pub fn convert(&self, detail: &ErrorDetail) -> String {
        match self {
            ConversionStrategy::PassThrough => detail.message.clone(),
            ConversionStrategy::FixedTemplate(template) => {
                substitute(template, &detail.context)
            }
            ConversionStrategy::PatternList(entries) => {
                for entry in entries {
                    if entry.pattern.matches(&detail.message) {
                        return substitute(&entry.template, &detail.context);
                    }
                }
                log::trace!(
                    "no pattern entry matched message for '{}', keeping original",
                    detail.path
                );
                detail.message.clone()
            }
            ConversionStrategy::TypeMap(handlers) => {
                let candidate = handlers
                    .get(&detail.kind)
                    .and_then(|handler| handler(&detail.context));
                match candidate {
                    // An empty template also falls through to the
                    // detail's own message.
                    Some(template) if !template.is_empty() => {
                        substitute(&template, &detail.context)
                    }
                    _ => {
                        log::trace!(
                            "no template for type '{}' at '{}', keeping original",
                            detail.kind,
                            detail.path
                        );
                        detail.message.clone()
                    }
                }
            }
        }
    }
}

impl fmt::Debug for ConversionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionStrategy::PassThrough => f.write_str("PassThrough"),
            ConversionStrategy::FixedTemplate(template) => {
                f.debug_tuple("FixedTemplate").field(template).finish()
            }
            ConversionStrategy::PatternList(entries) => {
                f.debug_tuple("PatternList").field(entries).finish()
            }
            ConversionStrategy::TypeMap(handlers) => {
                let mut kinds: Vec<&String> = handlers.keys().collect();
                kinds.sort();
                f.debug_tuple("TypeMap").field(&kinds).finish()
            }
        }
    }
}

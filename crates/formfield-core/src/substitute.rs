//! Placeholder substitution for message templates
//!
//! Expands `${name}` tokens in a template using a detail's context.
//! This is the leaf of the conversion pipeline; every strategy that
//! produces a template routes it through [`substitute`].

use crate::types::Context;

/// Expand `${name}` placeholders in `message` from `context`
///
/// Every occurrence of the exact token `${key}` is replaced with the
/// Display form of the corresponding context value. Replacement is
/// global and literal; the token text is never interpreted as a
/// pattern. A placeholder with no matching context key is left
/// verbatim in the output.
pub fn substitute(message: &str, context: &Context) -> String {
    let mut resolved = message.to_string();
    for (name, value) in context {
        let token = format!("${{{}}}", name);
        if resolved.contains(&token) {
            resolved = resolved.replace(&token, &value.to_string());
        }
    }
    resolved
}

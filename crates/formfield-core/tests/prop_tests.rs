//! Property-based tests for report conversion
//!
//! These tests verify the conversion invariants across a wide range of
//! generated reports: key-set equality with last-write-wins, the
//! missing-details sentinel, and placeholder substitution behavior.

use formfield_core::{
    substitute, Context, ContextValue, ConversionStrategy, ErrorDetail, ReportConverter,
    ValidationReport,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Strategy for generating field paths from a small pool, so duplicate
/// paths occur regularly
fn path_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("name"),
        Just("email"),
        Just("password"),
        Just("profile.age"),
    ]
}

/// Strategy for generating default messages
fn message_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?]{0,60}"
}

/// Strategy for generating context values of every supported shape
fn context_value_strategy() -> impl Strategy<Value = ContextValue> {
    prop_oneof![
        Just(ContextValue::Undefined),
        "[a-zA-Z0-9 ]{0,20}".prop_map(ContextValue::from),
        any::<i64>().prop_map(ContextValue::from),
        "[a-z0-9]{1,10}".prop_map(ContextValue::pattern),
    ]
}

/// Strategy for generating contexts
fn context_strategy() -> impl Strategy<Value = Context> {
    proptest::collection::hash_map("[a-z]{1,8}", context_value_strategy(), 0..4)
}

/// Strategy for generating whole detail lists
fn details_strategy() -> impl Strategy<Value = Vec<ErrorDetail>> {
    proptest::collection::vec(
        (path_strategy(), message_strategy()).prop_map(|(path, message)| {
            ErrorDetail::new(path, message, "any.invalid")
        }),
        0..8,
    )
}

proptest! {
    #[test]
    fn prop_key_set_equals_distinct_paths(details in details_strategy()) {
        let converter = ReportConverter::plain(ConversionStrategy::PassThrough);
        let errors = converter
            .convert(&ValidationReport::new(details.clone()))
            .expect("details are present");

        let distinct_paths: HashSet<&str> =
            details.iter().map(|d| d.path.as_str()).collect();
        let keys: HashSet<&str> = errors.keys().map(|k| k.as_str()).collect();
        prop_assert_eq!(keys, distinct_paths);
    }

    #[test]
    fn prop_duplicate_paths_keep_last_message(details in details_strategy()) {
        let converter = ReportConverter::plain(ConversionStrategy::PassThrough);
        let errors = converter
            .convert(&ValidationReport::new(details.clone()))
            .expect("details are present");

        let mut expected: HashMap<&str, &str> = HashMap::new();
        for detail in &details {
            expected.insert(&detail.path, &detail.message);
        }
        for (path, message) in expected {
            prop_assert_eq!(errors[path].message(), message);
        }
    }

    #[test]
    fn prop_missing_details_is_the_only_none(details in proptest::option::of(details_strategy())) {
        let converter = ReportConverter::plain(ConversionStrategy::PassThrough);
        let report = ValidationReport { details: details.clone() };
        prop_assert_eq!(converter.convert(&report).is_none(), details.is_none());
    }

    #[test]
    fn prop_empty_context_leaves_message_unchanged(message in message_strategy()) {
        prop_assert_eq!(substitute(&message, &Context::new()), message);
    }

    #[test]
    fn prop_template_without_tokens_unchanged(
        template in "[a-zA-Z0-9 .,]{0,80}",
        context in context_strategy(),
    ) {
        // The template alphabet excludes '$' and '{', so no token can
        // ever match.
        prop_assert_eq!(substitute(&template, &context), template);
    }

    #[test]
    fn prop_unresolved_placeholder_left_verbatim(
        key in "[a-z]{3,8}",
        context in context_strategy(),
    ) {
        prop_assume!(!context.contains_key(&key));
        let template = format!("start ${{{}}} end", key);
        prop_assert_eq!(substitute(&template, &context), template);
    }

    #[test]
    fn prop_substitution_is_idempotent_for_plain_values(
        key in "[a-z]{1,8}",
        value in "[a-zA-Z0-9 ]{0,20}",
    ) {
        let mut context = Context::new();
        context.insert(key.clone(), ContextValue::from(value));
        let template = format!("\"${{{}}}\" is badly formed.", key);
        let once = substitute(&template, &context);
        prop_assert_eq!(substitute(&once, &context), once);
    }

    #[test]
    fn prop_fixed_template_agrees_with_substitutor(
        context in context_strategy(),
        message in message_strategy(),
    ) {
        let template = "\"${key}\" is invalid (${limit}).";
        let detail = ErrorDetail {
            path: "field".to_string(),
            message,
            kind: "any.invalid".to_string(),
            context: context.clone(),
        };
        let strategy = ConversionStrategy::FixedTemplate(template.to_string());
        prop_assert_eq!(strategy.convert(&detail), substitute(template, &context));
    }

    #[test]
    fn prop_structured_and_plain_resolve_the_same_message(details in details_strategy()) {
        let plain = ReportConverter::plain(ConversionStrategy::PassThrough);
        let structured = ReportConverter::structured(ConversionStrategy::PassThrough);
        let report = ValidationReport::new(details);

        let plain_errors = plain.convert(&report).expect("details are present");
        let structured_errors = structured.convert(&report).expect("details are present");

        prop_assert_eq!(plain_errors.len(), structured_errors.len());
        for (path, error) in &plain_errors {
            prop_assert_eq!(error.message(), structured_errors[path].message());
        }
    }
}

#![forbid(unsafe_code)]

//! Assertion helpers for rendered markup and validation outcomes.
//!
//! Every assertion panics with the full rendered output or error list so a
//! failing test shows what was actually produced.

use std::collections::{BTreeSet, HashMap};

use formcraft_forms::{Field, Form, RenderContext, SequentialIds, ValidationError};
use formcraft_style::Theme;

/// Build a submission map from `(name, value)` pairs.
pub fn values<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> HashMap<String, String>
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Render a field's form group with the process default theme and
/// sequential IDs.
pub fn render_field(field: &mut Field) -> String {
    let ids = SequentialIds::default();
    let ctx = RenderContext::new().with_ids(&ids);
    field.form_group(&ctx).to_html()
}

/// Render a field's form group with `theme` forced.
pub fn render_field_with_theme(field: &mut Field, theme: &Theme) -> String {
    let ids = SequentialIds::default();
    let ctx = RenderContext::new().with_theme(theme).with_ids(&ids);
    field.form_group(&ctx).to_html()
}

/// Every class token used anywhere in `html`.
#[must_use]
pub fn class_tokens(html: &str) -> BTreeSet<String> {
    const MARKER: &str = "class=\"";
    let mut tokens = BTreeSet::new();
    let mut rest = html;
    while let Some(start) = rest.find(MARKER) {
        rest = &rest[start + MARKER.len()..];
        let Some(end) = rest.find('"') else {
            break;
        };
        tokens.extend(rest[..end].split_whitespace().map(str::to_owned));
        rest = &rest[end..];
    }
    tokens
}

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

#[track_caller]
pub fn assert_html_contains(html: &str, needle: &str, what: &str) {
    assert!(
        html.contains(needle),
        "{what} output does not contain {needle:?}\n\nActual output:\n{html}"
    );
}

#[track_caller]
pub fn assert_html_not_contains(html: &str, needle: &str, what: &str) {
    assert!(
        !html.contains(needle),
        "{what} output unexpectedly contains {needle:?}\n\nActual output:\n{html}"
    );
}

/// Assert every needle occurs, each after the previous one.
#[track_caller]
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(at) => from += at + needle.len(),
            None => panic!(
                "{needle:?} not found after byte {from}\n\nExpected order: {needles:?}\n\nActual output:\n{html}"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {}: {} ({})", e.field, e.message, e.code))
        .collect::<Vec<_>>()
        .join("\n")
}

#[track_caller]
pub fn assert_validation_passes(form: &mut Form, values: &HashMap<String, String>) {
    let errors = form.validate(values);
    assert!(
        errors.is_empty(),
        "expected validation to pass, got {} error(s):\n{}",
        errors.len(),
        describe(&errors)
    );
}

/// Assert validation fails and return the errors.
#[track_caller]
pub fn assert_validation_fails(
    form: &mut Form,
    values: &HashMap<String, String>,
) -> Vec<ValidationError> {
    let errors = form.validate(values);
    assert!(!errors.is_empty(), "expected validation to fail, but it passed");
    errors
}

/// Assert at least one error names `field` and return those errors.
#[track_caller]
pub fn assert_validation_fails_on(
    form: &mut Form,
    values: &HashMap<String, String>,
    field: &str,
) -> Vec<ValidationError> {
    let errors = form.validate(values);
    let on_field: Vec<_> = errors.iter().filter(|e| e.field == field).cloned().collect();
    assert!(
        !on_field.is_empty(),
        "expected an error on {field:?}, got:\n{}",
        describe(&errors)
    );
    on_field
}

#[track_caller]
pub fn assert_error_count(form: &mut Form, values: &HashMap<String, String>, expected: usize) {
    let errors = form.validate(values);
    assert_eq!(
        errors.len(),
        expected,
        "unexpected error count:\n{}",
        describe(&errors)
    );
}

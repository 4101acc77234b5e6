#![forbid(unsafe_code)]

//! Submitted-value validation.
//!
//! [`validate_fields`] runs each field's rules against a name-keyed value
//! map and returns every violation in field order. [`ErrorSnapshot`] turns
//! that list into the name-to-message map a render pass reads inline
//! errors from.

pub mod validators;

use std::collections::HashMap;

pub use validators::{
    Custom, MaxLength, MinLength, NumericBound, OneOf, Pattern, PatternError, Required,
    SharedValidator, ValidationError, ValidationResult, Validator,
};

use crate::field::Field;
use crate::kind::FieldKind;

/// Name-keyed inline error messages for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSnapshot {
    messages: HashMap<String, String>,
}

impl ErrorSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of `errors`. When a name repeats, its first message wins.
    #[must_use]
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let mut snapshot = Self::new();
        for error in errors {
            snapshot
                .messages
                .entry(error.field.clone())
                .or_insert_with(|| error.message.clone());
        }
        snapshot
    }

    /// Set the message for `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(name.into(), message.into());
    }

    /// Message for `name`, if any. Empty messages count as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.messages
            .get(name)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (k, v) in iter {
            snapshot.insert(k, v);
        }
        snapshot
    }
}

/// Validate one field against its submitted value.
///
/// A required field whose value is blank after trimming yields exactly one
/// required error and skips its other rules. Otherwise every rule runs in
/// order and every failure is kept.
pub fn validate_field(field: &Field, value: &str) -> Vec<ValidationError> {
    let name = field.name();
    if field.is_required() && value.trim().is_empty() {
        return vec![ValidationError::required(name)];
    }
    field
        .validators()
        .iter()
        .filter_map(|v| v.validate(name, value).into_error())
        .collect()
}

/// Validate `fields` in order. Missing values count as empty; raw fields
/// are skipped.
pub fn validate_fields<'f, I>(fields: I, values: &HashMap<String, String>) -> Vec<ValidationError>
where
    I: IntoIterator<Item = &'f Field>,
{
    let mut errors = Vec::new();
    let mut checked = 0usize;
    for field in fields {
        if field.kind() == FieldKind::Raw {
            continue;
        }
        checked += 1;
        let value = values.get(field.name()).map_or("", String::as_str);
        errors.extend(validate_field(field, value));
    }
    tracing::debug!(fields = checked, errors = errors.len(), "validated submission");
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validators::{max_length, min_length, pattern};

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn required_short_circuits_other_rules() {
        let field = Field::string("code", "")
            .with_required(true)
            .with_validators([min_length(3), pattern(r"^\d+$", "")]);
        let errors = validate_field(&field, "   ");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "code is required");
    }

    #[test]
    fn all_failing_rules_surface() {
        let field = Field::string("code", "").with_validators([
            min_length(5),
            pattern(r"^\d+$", "code must be digits"),
            max_length(10),
        ]);
        let errors = validate_field(&field, "ab");
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            ["code must be at least 5 characters", "code must be digits"]
        );
    }

    #[test]
    fn missing_value_is_empty() {
        let fields = [Field::email("email", "").with_required(true)];
        let errors = validate_fields(&fields, &HashMap::new());
        assert_eq!(errors, vec![ValidationError::required("email")]);
    }

    #[test]
    fn raw_fields_skipped() {
        let fields = [
            Field::raw("<hr />").with_name("sep").with_required(true),
            Field::string("name", "").with_required(true),
        ];
        let errors = validate_fields(&fields, &values(&[]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn snapshot_first_message_wins() {
        let errors = vec![
            ValidationError::new("a", "x", "first"),
            ValidationError::new("a", "y", "second"),
            ValidationError::new("b", "z", "other"),
        ];
        let snap = ErrorSnapshot::from_errors(&errors);
        assert_eq!(snap.get("a"), Some("first"));
        assert_eq!(snap.get("b"), Some("other"));
        assert_eq!(snap.len(), 2);
    }

    #[test]
    fn snapshot_empty_message_is_absent() {
        let snap: ErrorSnapshot = [("a", "")].into_iter().collect();
        assert_eq!(snap.get("a"), None);
        assert!(!snap.is_empty());
    }
}

#![forbid(unsafe_code)]

//! Validation error type, the [`Validator`] trait, and built-in validators.
//!
//! Messages are templates: `{field}` is replaced by the field name when the
//! error is produced, so `min_length(8)` on `password` yields
//! `password must be at least 8 characters`.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

// ---------------------------------------------------------------------------
// Error Codes
// ---------------------------------------------------------------------------

/// Required value missing.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Shorter than the minimum length.
pub const ERROR_CODE_MIN_LENGTH: &str = "too_short";
/// Longer than the maximum length.
pub const ERROR_CODE_MAX_LENGTH: &str = "too_long";
/// Value did not parse as a number.
pub const ERROR_CODE_NOT_A_NUMBER: &str = "not_a_number";
/// Number below the minimum.
pub const ERROR_CODE_RANGE_MIN: &str = "range_min";
/// Number above the maximum.
pub const ERROR_CODE_RANGE_MAX: &str = "range_max";
/// Regular expression mismatch.
pub const ERROR_CODE_PATTERN: &str = "pattern";
/// Not an email address.
pub const ERROR_CODE_EMAIL: &str = "email";
/// Not an http(s) URL.
pub const ERROR_CODE_URL: &str = "url";
/// Not a dotted-quad IPv4 address.
pub const ERROR_CODE_IP: &str = "ip";
/// Not a dashed UUID.
pub const ERROR_CODE_UUID: &str = "uuid";
/// Contains characters other than ASCII letters and digits.
pub const ERROR_CODE_ALPHA_NUMERIC: &str = "alpha_numeric";
/// Not in the allowed set.
pub const ERROR_CODE_ONE_OF: &str = "one_of";
/// Rejected by a caller-supplied rule.
pub const ERROR_CODE_CUSTOM: &str = "custom";

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A rule violation for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable message.
    pub message: String,
    /// Stable identifier for programmatic handling.
    pub code: &'static str,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }

    /// Build from a message template, substituting `{field}`.
    #[must_use]
    pub fn from_template(field: &str, code: &'static str, template: &str) -> Self {
        Self::new(field, code, template.replace("{field}", field))
    }

    /// The error every required field reports when left blank.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::from_template(field, ERROR_CODE_REQUIRED, "{field} is required")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// Outcome of one validator on one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    fn fail(field: &str, code: &'static str, template: &str) -> Self {
        Self::Invalid(ValidationError::from_template(field, code, template))
    }
}

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A pure rule applied to one submitted value.
///
/// Closures `Fn(&str, &str) -> ValidationResult` taking the field name and
/// the value implement this directly.
pub trait Validator: Send + Sync {
    /// Check `value` submitted under `field`.
    fn validate(&self, field: &str, value: &str) -> ValidationResult;
}

impl<F> Validator for F
where
    F: Fn(&str, &str) -> ValidationResult + Send + Sync,
{
    fn validate(&self, field: &str, value: &str) -> ValidationResult {
        self(field, value)
    }
}

/// A validator shared between field clones.
pub type SharedValidator = Arc<dyn Validator>;

// ---------------------------------------------------------------------------
// Built-in Validators
// ---------------------------------------------------------------------------

/// Rejects values that are empty after trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator for Required {
    fn validate(&self, field: &str, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            ValidationResult::Invalid(ValidationError::required(field))
        } else {
            ValidationResult::Valid
        }
    }
}

/// Requires at least `min` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    pub min: usize,
}

impl MinLength {
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator for MinLength {
    fn validate(&self, field: &str, value: &str) -> ValidationResult {
        if value.chars().count() < self.min {
            ValidationResult::fail(
                field,
                ERROR_CODE_MIN_LENGTH,
                &format!("{{field}} must be at least {} characters", self.min),
            )
        } else {
            ValidationResult::Valid
        }
    }
}

/// Allows at most `max` characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    pub max: usize,
}

impl MaxLength {
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validator for MaxLength {
    fn validate(&self, field: &str, value: &str) -> ValidationResult {
        if value.chars().count() > self.max {
            ValidationResult::fail(
                field,
                ERROR_CODE_MAX_LENGTH,
                &format!("{{field}} must be at most {} characters", self.max),
            )
        } else {
            ValidationResult::Valid
        }
    }
}

/// Which side of a numeric bound is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

/// Parses the value as a number and checks one bound.
///
/// A value that does not parse is reported separately from one that is out
/// of range.
#[derive(Debug, Clone, Copy)]
pub struct NumericBound {
    limit: f64,
    bound: Bound,
}

impl NumericBound {
    #[must_use]
    pub fn min(limit: f64) -> Self {
        Self {
            limit,
            bound: Bound::Min,
        }
    }

    #[must_use]
    pub fn max(limit: f64) -> Self {
        Self {
            limit,
            bound: Bound::Max,
        }
    }
}

impl Validator for NumericBound {
    fn validate(&self, field: &str, value: &str) -> ValidationResult {
        let Ok(number) = value.parse::<f64>() else {
            return ValidationResult::fail(
                field,
                ERROR_CODE_NOT_A_NUMBER,
                "{field} must be a valid number",
            );
        };
        match self.bound {
            Bound::Min if number < self.limit => ValidationResult::fail(
                field,
                ERROR_CODE_RANGE_MIN,
                &format!("{{field}} must be at least {}", self.limit),
            ),
            Bound::Max if number > self.limit => ValidationResult::fail(
                field,
                ERROR_CODE_RANGE_MAX,
                &format!("{{field}} must be at most {}", self.limit),
            ),
            _ => ValidationResult::Valid,
        }
    }
}

/// A pattern that failed to compile.
#[derive(Debug, Clone)]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern {:?}: {}", self.pattern, self.message)
    }
}

impl std::error::Error for PatternError {}

const PATTERN_TEMPLATE: &str = "{field} has an invalid format";

/// Regular-expression match. Empty values pass.
#[derive(Debug, Clone)]
pub struct Pattern {
    // `None` when the source pattern failed to compile; such a validator
    // rejects every non-empty value.
    regex: Option<Regex>,
    // Built-in message; `{field}` is replaced with the field name.
    template: &'static str,
    // Caller message, reported verbatim.
    message: Option<String>,
    code: &'static str,
}

impl Pattern {
    /// Compile `pattern`, reporting syntax errors.
    pub fn try_new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|e| PatternError {
            pattern: pattern.to_owned(),
            message: e.to_string(),
        })?;
        Ok(Self::from_regex(regex))
    }

    /// Wrap an already compiled expression.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex: Some(regex),
            template: PATTERN_TEMPLATE,
            message: None,
            code: ERROR_CODE_PATTERN,
        }
    }

    fn rejecting_all() -> Self {
        Self {
            regex: None,
            template: PATTERN_TEMPLATE,
            message: None,
            code: ERROR_CODE_PATTERN,
        }
    }

    /// Report `message` as given instead of the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    fn with_template(mut self, template: &'static str) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    fn with_code(mut self, code: &'static str) -> Self {
        self.code = code;
        self
    }
}

impl Validator for Pattern {
    fn validate(&self, field: &str, value: &str) -> ValidationResult {
        if value.is_empty() {
            return ValidationResult::Valid;
        }
        match (&self.regex, &self.message) {
            (Some(re), _) if re.is_match(value) => ValidationResult::Valid,
            (_, Some(message)) => {
                ValidationResult::Invalid(ValidationError::new(field, self.code, message.clone()))
            }
            (_, None) => ValidationResult::fail(field, self.code, self.template),
        }
    }
}

/// Membership in a fixed set. Empty values pass.
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<String>,
}

impl OneOf {
    #[must_use]
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for OneOf {
    fn validate(&self, field: &str, value: &str) -> ValidationResult {
        if value.is_empty() || self.allowed.iter().any(|a| a == value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(
                field,
                ERROR_CODE_ONE_OF,
                format!("{field} must be one of: {}", self.allowed.join(", ")),
            ))
        }
    }
}

/// Caller-supplied rule: returns a message for invalid values.
#[derive(Clone)]
pub struct Custom {
    check: Arc<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl Custom {
    pub fn new(check: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            check: Arc::new(check),
        }
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Custom(..)")
    }
}

impl Validator for Custom {
    fn validate(&self, field: &str, value: &str) -> ValidationResult {
        match (self.check)(value) {
            Some(message) => {
                ValidationResult::Invalid(ValidationError::new(field, ERROR_CODE_CUSTOM, message))
            }
            None => ValidationResult::Valid,
        }
    }
}

// ---------------------------------------------------------------------------
// Preset patterns
// ---------------------------------------------------------------------------

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("url pattern"));

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$")
        .expect("ipv4 pattern")
});

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern")
});

static ALPHA_NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alphanumeric pattern"));

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

/// Non-empty after trimming.
#[must_use]
pub fn required() -> SharedValidator {
    Arc::new(Required)
}

/// At least `n` characters.
#[must_use]
pub fn min_length(n: usize) -> SharedValidator {
    Arc::new(MinLength::new(n))
}

/// At most `n` characters.
#[must_use]
pub fn max_length(n: usize) -> SharedValidator {
    Arc::new(MaxLength::new(n))
}

/// Numeric and `>= limit`.
#[must_use]
pub fn min(limit: f64) -> SharedValidator {
    Arc::new(NumericBound::min(limit))
}

/// Numeric and `<= limit`.
#[must_use]
pub fn max(limit: f64) -> SharedValidator {
    Arc::new(NumericBound::max(limit))
}

/// Matches `pattern`; `message` replaces the default when non-empty.
///
/// A pattern that fails to compile yields a validator that rejects every
/// non-empty value with `message`. Use [`Pattern::try_new`] to surface the
/// syntax error instead.
#[must_use]
pub fn pattern(pattern: &str, message: &str) -> SharedValidator {
    let validator = match Pattern::try_new(pattern) {
        Ok(p) => p,
        Err(error) => {
            tracing::warn!(%error, "pattern validator will reject all input");
            Pattern::rejecting_all()
        }
    };
    if message.is_empty() {
        Arc::new(validator)
    } else {
        Arc::new(validator.with_message(message))
    }
}

/// Email address shape.
#[must_use]
pub fn email() -> SharedValidator {
    Arc::new(
        Pattern::from_regex(EMAIL_RE.clone())
            .with_template("{field} must be a valid email address")
            .with_code(ERROR_CODE_EMAIL),
    )
}

/// `http://` or `https://` URL.
#[must_use]
pub fn url() -> SharedValidator {
    Arc::new(
        Pattern::from_regex(URL_RE.clone())
            .with_template("{field} must be a valid URL")
            .with_code(ERROR_CODE_URL),
    )
}

/// Dotted-quad IPv4 address with octets in 0..=255.
#[must_use]
pub fn ip() -> SharedValidator {
    Arc::new(
        Pattern::from_regex(IPV4_RE.clone())
            .with_template("{field} must be a valid IP address")
            .with_code(ERROR_CODE_IP),
    )
}

/// Dashed hexadecimal UUID.
#[must_use]
pub fn uuid() -> SharedValidator {
    Arc::new(
        Pattern::from_regex(UUID_RE.clone())
            .with_template("{field} must be a valid UUID")
            .with_code(ERROR_CODE_UUID),
    )
}

/// ASCII letters and digits only.
#[must_use]
pub fn alpha_numeric() -> SharedValidator {
    Arc::new(
        Pattern::from_regex(ALPHA_NUMERIC_RE.clone())
            .with_template("{field} must contain only letters and numbers")
            .with_code(ERROR_CODE_ALPHA_NUMERIC),
    )
}

/// One of `allowed`.
#[must_use]
pub fn one_of<I, S>(allowed: I) -> SharedValidator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(OneOf::new(allowed))
}

/// Arbitrary rule returning a message for invalid values.
pub fn custom(check: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> SharedValidator {
    Arc::new(Custom::new(check))
}

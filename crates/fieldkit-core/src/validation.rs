//! Constraint validation for text field values.
//!
//! Validators mirror the HTML constraint attributes a text input usually
//! carries (`required`, `minlength`, `maxlength`, `pattern`). The input
//! foundation folds their verdict into `check_validity`.

use std::fmt;

/// Outcome of validating a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Value satisfies the constraint.
    Valid,
    /// Value violates the constraint.
    Invalid(String),
}

impl ValidationResult {
    /// Check if validation passed.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get the error message if invalid.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            Self::Valid => None,
        }
    }
}

/// A constraint on a string value.
pub trait Validator {
    /// Validate the given value.
    fn validate(&self, value: &str) -> ValidationResult;

    /// Constraint name.
    fn name(&self) -> &str;
}

/// Value must not be blank.
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    /// Create a required validator with default message.
    pub fn new() -> Self {
        Self {
            message: "Please fill out this field".to_string(),
        }
    }

    /// Create with custom message.
    pub fn with_message(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Minimum number of characters.
///
/// Like `minlength`, an empty value passes; pair with [`Required`].
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    /// Create a min length validator.
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: format!("Use at least {min} characters"),
        }
    }
}

impl Validator for MinLength {
    fn validate(&self, value: &str) -> ValidationResult {
        let len = value.chars().count();
        if len > 0 && len < self.min {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }

    fn name(&self) -> &'static str {
        "minLength"
    }
}

/// Maximum number of characters.
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
    message: String,
}

impl MaxLength {
    /// Create a max length validator.
    pub fn new(max: usize) -> Self {
        Self {
            max,
            message: format!("Use at most {max} characters"),
        }
    }
}

impl Validator for MaxLength {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.chars().count() > self.max {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }

    fn name(&self) -> &'static str {
        "maxLength"
    }
}

/// Shape a non-empty value must have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternType {
    /// Email address.
    Email,
    /// `http`, `https` or `ftp` URL.
    Url,
    /// ASCII digits only.
    Digits,
    /// Letters and numbers only.
    Alphanumeric,
    /// Glob where `*` matches any run of characters.
    Glob(String),
}

/// Pattern validator.
///
/// Empty values pass; emptiness is [`Required`]'s concern.
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: PatternType,
    message: String,
}

impl Pattern {
    /// Create a pattern validator.
    pub fn new(pattern: PatternType) -> Self {
        let message = match &pattern {
            PatternType::Email => "Enter an email address".to_string(),
            PatternType::Url => "Enter a URL".to_string(),
            PatternType::Digits => "Use digits only".to_string(),
            PatternType::Alphanumeric => "Use letters and numbers only".to_string(),
            PatternType::Glob(glob) => format!("Match the format {glob}"),
        };
        Self { pattern, message }
    }

    /// Replace the message.
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    fn matches(&self, value: &str) -> bool {
        match &self.pattern {
            PatternType::Email => {
                let mut parts = value.splitn(2, '@');
                let local = parts.next().unwrap_or_default();
                let Some(domain) = parts.next() else {
                    return false;
                };
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            PatternType::Url => ["http://", "https://", "ftp://"]
                .iter()
                .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme)),
            PatternType::Digits => value.chars().all(|c| c.is_ascii_digit()),
            PatternType::Alphanumeric => value.chars().all(char::is_alphanumeric),
            PatternType::Glob(glob) => glob_matches(glob, value),
        }
    }
}

fn glob_matches(glob: &str, value: &str) -> bool {
    let parts: Vec<&str> = glob.split('*').collect();
    if parts.len() == 1 {
        return value == glob;
    }

    let Some((first, rest)) = parts.split_first() else {
        return false;
    };
    let Some((last, middle)) = rest.split_last() else {
        return false;
    };
    let Some(mut remaining) = value.strip_prefix(*first) else {
        return false;
    };
    for part in middle {
        match remaining.find(*part) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }
    remaining.ends_with(*last)
}

impl Validator for Pattern {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() || self.matches(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.message.clone())
        }
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

/// Validator backed by a closure.
pub struct Custom<F>
where
    F: Fn(&str) -> ValidationResult,
{
    validator: F,
    name: String,
}

impl<F> Custom<F>
where
    F: Fn(&str) -> ValidationResult,
{
    /// Create a custom validator.
    pub fn new(name: &str, validator: F) -> Self {
        Self {
            validator,
            name: name.to_string(),
        }
    }
}

impl<F> Validator for Custom<F>
where
    F: Fn(&str) -> ValidationResult,
{
    fn validate(&self, value: &str) -> ValidationResult {
        (self.validator)(value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for Custom<F>
where
    F: Fn(&str) -> ValidationResult,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").field("name", &self.name).finish()
    }
}

/// All constraints of one field.
#[derive(Default)]
pub struct FieldValidator {
    validators: Vec<Box<dyn Validator>>,
}

impl FieldValidator {
    /// Create an empty validator set; every value passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validator.
    #[must_use]
    pub fn with<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Add a validator in place.
    pub fn push<V: Validator + 'static>(&mut self, validator: V) {
        self.validators.push(Box::new(validator));
    }

    /// Number of validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether no validators are configured.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Messages of every failing validator, in insertion order.
    pub fn validate(&self, value: &str) -> Vec<String> {
        self.validators
            .iter()
            .filter_map(|validator| match validator.validate(value) {
                ValidationResult::Invalid(msg) => Some(msg),
                ValidationResult::Valid => None,
            })
            .collect()
    }

    /// Whether every validator passes.
    pub fn is_valid(&self, value: &str) -> bool {
        self.validators
            .iter()
            .all(|validator| validator.validate(value).is_valid())
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.validators.iter().map(|v| v.name()).collect();
        f.debug_struct("FieldValidator")
            .field("validators", &names)
            .finish()
    }
}

//! Declarative text field configuration.
//!
//! ```yaml
//! value: ""
//! disabled: false
//! icon: true
//! helper_text:
//!   text: "We never share your email"
//!   validation_msg: true
//! constraints:
//!   required: true
//!   pattern: email
//! ```

use crate::error::ConfigError;
use crate::validation::{FieldValidator, MaxLength, MinLength, Pattern, PatternType, Required};
use serde::{Deserialize, Serialize};

/// Markup and initial state of one text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFieldConfig {
    /// Pre-filled value
    #[serde(default)]
    pub value: String,
    /// Label text
    #[serde(default)]
    pub label: String,
    /// Start disabled
    #[serde(default)]
    pub disabled: bool,
    /// Render an icon
    #[serde(default)]
    pub icon: bool,
    /// Render a bottom line
    #[serde(default = "default_bottom_line")]
    pub bottom_line: bool,
    /// Helper text below the field
    #[serde(default)]
    pub helper_text: Option<HelperTextConfig>,
    /// Value constraints
    #[serde(default)]
    pub constraints: ConstraintConfig,
}

const fn default_bottom_line() -> bool {
    true
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            value: String::new(),
            label: String::new(),
            disabled: false,
            icon: false,
            bottom_line: default_bottom_line(),
            helper_text: None,
            constraints: ConstraintConfig::default(),
        }
    }
}

impl TextFieldConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no value could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.constraints.min_length, self.constraints.max_length)
        {
            if min > max {
                return Err(ConfigError::InvalidValue {
                    field: "constraints.min_length".to_string(),
                    message: format!("{min} exceeds max_length {max}"),
                });
            }
        }
        if let Some(PatternKind::Glob(glob)) = &self.constraints.pattern {
            if glob.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "constraints.pattern".to_string(),
                    message: "glob must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Helper text configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperTextConfig {
    /// Text content
    #[serde(default)]
    pub text: String,
    /// Stay visible regardless of focus
    #[serde(default)]
    pub persistent: bool,
    /// Act as the validation message
    #[serde(default)]
    pub validation_msg: bool,
}

/// Named pattern constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Email,
    Url,
    Digits,
    Alphanumeric,
    /// `*`-glob, e.g. `INV-*`
    Glob(String),
}

impl From<&PatternKind> for PatternType {
    fn from(kind: &PatternKind) -> Self {
        match kind {
            PatternKind::Email => Self::Email,
            PatternKind::Url => Self::Url,
            PatternKind::Digits => Self::Digits,
            PatternKind::Alphanumeric => Self::Alphanumeric,
            PatternKind::Glob(glob) => Self::Glob(glob.clone()),
        }
    }
}

/// Constraints checked on blur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintConfig {
    /// Value must not be blank
    #[serde(default)]
    pub required: bool,
    /// Minimum character count
    #[serde(default)]
    pub min_length: Option<usize>,
    /// Maximum character count
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Pattern the value must match
    #[serde(default, with = "serde_yaml_ng::with::singleton_map")]
    pub pattern: Option<PatternKind>,
}

impl ConstraintConfig {
    /// Build the validator set for these constraints.
    pub fn build(&self) -> FieldValidator {
        let mut validator = FieldValidator::new();
        if self.required {
            validator.push(Required::new());
        }
        if let Some(min) = self.min_length {
            validator.push(MinLength::new(min));
        }
        if let Some(max) = self.max_length {
            validator.push(MaxLength::new(max));
        }
        if let Some(pattern) = &self.pattern {
            validator.push(Pattern::new(pattern.into()));
        }
        validator
    }
}

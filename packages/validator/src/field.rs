use crate::predicates::{
    is_required_field_valid, is_valid_data_binding, is_valid_email, is_valid_url,
};
use pagecraft_document::{FieldDescriptor, FieldKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const INVALID_URL: &str = "Invalid URL format. Please enter a valid URL.";
pub const INVALID_EMAIL: &str = "Invalid email format. Please enter a valid email address.";
pub const REQUIRED_NOT_EMPTY: &str = "This field is required and cannot be empty.";
pub const INVALID_DATA_BINDING: &str =
    "Invalid data binding syntax. Use {{ variableName }} format.";
pub const REQUIRED: &str = "This field is required.";
pub const INVALID_SELECTION: &str = "Invalid selection. Please choose from the available options.";

pub const DEFAULT_RANGE_MIN: f64 = 0.0;
pub const DEFAULT_RANGE_MAX: f64 = 100.0;

static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the document from being valid
    Error,
    /// Advisory only
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A problem with one field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub severity: Severity,
    pub message: String,
}

impl FieldIssue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Check one field value against its descriptor.
///
/// Returns `None` when the value is acceptable. An empty value on an optional
/// field is always acceptable, whatever the kind.
pub fn validate_field(descriptor: &FieldDescriptor, value: &str) -> Option<FieldIssue> {
    if value.is_empty() && !descriptor.required {
        return None;
    }

    match &descriptor.kind {
        FieldKind::Url => (!is_valid_url(value)).then(|| FieldIssue::error(INVALID_URL)),
        FieldKind::Email => (!is_valid_email(value)).then(|| FieldIssue::error(INVALID_EMAIL)),
        FieldKind::RequiredText => {
            (!is_required_field_valid(value)).then(|| FieldIssue::error(REQUIRED_NOT_EMPTY))
        }
        FieldKind::DataBinding => {
            (!is_valid_data_binding(value)).then(|| FieldIssue::error(INVALID_DATA_BINDING))
        }
        FieldKind::NumericRange => check_range(descriptor, value),
        FieldKind::SingleSelect => check_selection(descriptor, value),
        FieldKind::PlainText | FieldKind::Other(_) => {
            let missing = descriptor.required && !is_required_field_valid(value);
            missing.then(|| FieldIssue::error(REQUIRED))
        }
    }
}

fn check_range(descriptor: &FieldDescriptor, value: &str) -> Option<FieldIssue> {
    let min = descriptor.min.unwrap_or(DEFAULT_RANGE_MIN);
    let max = descriptor.max.unwrap_or(DEFAULT_RANGE_MAX);

    match parse_number_prefix(value) {
        Some(number) if number >= min && number <= max => None,
        _ => Some(FieldIssue::error(format!(
            "Value must be between {} and {}.",
            min, max
        ))),
    }
}

fn check_selection(descriptor: &FieldDescriptor, value: &str) -> Option<FieldIssue> {
    if value.is_empty() || descriptor.options.is_empty() {
        return None;
    }

    let known = descriptor.options.iter().any(|option| option.id == value);
    (!known).then(|| FieldIssue::warning(INVALID_SELECTION))
}

/// Read the leading number of a value the way number inputs do (`"12px"` is 12)
pub fn parse_number_prefix(value: &str) -> Option<f64> {
    let matched = NUMBER_PREFIX_RE.find(value.trim_start())?;
    matched.as_str().parse().ok()
}

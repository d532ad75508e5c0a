//! Stateless acceptability checks, one per field kind.
//!
//! Every predicate except [`is_required_field_valid`] treats an empty or
//! whitespace-only value as acceptable: an unfilled optional field is not a
//! malformed one.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Identifiers may not start with a digit, so `items.0.name` is rejected.
static DATA_BINDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{\s*[a-zA-Z_$][a-zA-Z0-9_$]*(?:\.[a-zA-Z_$][a-zA-Z0-9_$]*)*\s*\}\}$").unwrap()
});

/// Prefixes accepted as links even though they are not absolute URLs
const RELATIVE_LINK_PREFIXES: &[&str] = &["/", "#", "mailto:", "tel:"];

/// Absolute URLs, page-relative paths, anchors, `mailto:` and `tel:` links
pub fn is_valid_url(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }

    Url::parse(value).is_ok()
        || RELATIVE_LINK_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
}

/// `local@domain.tld` with no whitespace and no extra `@`
pub fn is_valid_email(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }

    EMAIL_RE.is_match(value)
}

/// Anything but empty or whitespace-only
pub fn is_required_field_valid(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `{{ identifier(.identifier)* }}` with optional whitespace inside the braces
pub fn is_valid_data_binding(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }

    DATA_BINDING_RE.is_match(trimmed)
}

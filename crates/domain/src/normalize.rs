//! Pure normalization and format-validation helpers.
//!
//! Case normalization is applied explicitly by the lifecycle services before
//! an entity value is constructed, never as a side effect of construction.
//! The case rules are intentionally per-entity: user emails and usernames are
//! lowercased, user and customer names are uppercased, customer emails are
//! uppercased, app names and images are lowercased.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    // Leading-digits check only, not a full document-number validation.
    static ref DOCUMENT_RE: Regex = Regex::new(r"^\d+").unwrap();
}

/// True when the value is missing, empty, or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn uppercased(value: &str) -> String {
    value.to_uppercase()
}

pub fn lowercased(value: &str) -> String {
    value.to_lowercase()
}

/// Checks an address against the standard email pattern. Case-insensitive by
/// construction, so it accepts both lowercased and uppercased stored forms.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_document(value: &str) -> bool {
    DOCUMENT_RE.is_match(value)
}

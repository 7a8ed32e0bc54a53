//! Field validation rules.
//!
//! Every rule is a pure predicate over the raw field value. Values are
//! trimmed before length checks, matching what users see as "filled in";
//! the selection rules deliberately skip trimming because a select's
//! value is either a real option or the empty placeholder.

use serde::{Deserialize, Serialize};

/// A validation predicate for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldRule {
    /// Trimmed value must be at least this many characters.
    MinLength { min: usize },
    /// Trimmed value must look like an email address.
    Email,
    /// Value must be non-empty (a select with an option chosen).
    Selected,
    /// Trimmed value must be non-empty.
    NonEmpty,
    /// Value must contain at least one non-empty comma-separated item.
    NonEmptyList,
}

impl FieldRule {
    /// Check a raw field value against this rule.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::MinLength { min } => value.trim().chars().count() >= *min,
            Self::Email => is_email(value.trim()),
            Self::Selected => !value.is_empty(),
            Self::NonEmpty => !value.trim().is_empty(),
            Self::NonEmptyList => value.split(',').any(|item| !item.is_empty()),
        }
    }
}

/// Loose email shape check: no whitespace, a single `@` with text on both
/// sides, and a dot strictly inside the domain part.
fn is_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.find('.') {
        Some(i) => i > 0 && i < domain.len() - 1,
        None => false,
    }
}

//! Item text validation.
//!
//! Creation is strict: text is trimmed and must be non-empty. Updates are
//! lenient and store supplied text verbatim, so nothing here is applied on
//! the patch path.

use crate::error::ValidationError;

/// Validate text for a new item, returning the trimmed text.
pub fn validate_text(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// Validate optional text from a create request.
///
/// A missing field is reported the same way as blank text.
pub fn validate_required_text(text: Option<&str>) -> Result<String, ValidationError> {
    match text {
        Some(text) => validate_text(text),
        None => Err(ValidationError::EmptyText),
    }
}

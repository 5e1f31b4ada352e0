//! Guestbook rules: required-field checks, delete password comparison, and
//! the acknowledgment messages shown to visitors.

use validator::ValidationErrors;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Visitor-facing messages
// ---------------------------------------------------------------------------

pub const SUBMISSION_ACK: &str = "Thank you for your comment!";
pub const LIKE_ACK: &str = "You liked this comment!";
pub const ALREADY_LIKED: &str = "You have already liked this comment.";
pub const PASSWORD_MISMATCH: &str = "Password does not match.";
pub const REQUIRED_FIELDS: &str = "Name, password, and comment are all required.";

/// Acknowledgment shown after a successful password-verified delete.
pub fn deletion_ack(author_name: &str) -> String {
    format!("{author_name}'s comment has been deleted.")
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Collapse per-field validator errors into one [`CoreError::Validation`].
///
/// The message always starts with [`REQUIRED_FIELDS`] and then lists the
/// offending fields in alphabetical order so responses are deterministic.
pub fn missing_fields_error(errors: &ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    CoreError::Validation(format!("{REQUIRED_FIELDS} Missing: {}", fields.join(", ")))
}

/// Compare a submitted delete password against the stored one.
///
/// Exact, case-sensitive equality. No lockout on repeated failures.
pub fn verify_password(stored: &str, submitted: &str) -> Result<(), CoreError> {
    if stored == submitted {
        Ok(())
    } else {
        Err(CoreError::Forbidden(PASSWORD_MISMATCH.into()))
    }
}

/// The "already liked" conflict for a given entry.
pub fn already_liked(entry_id: DbId) -> CoreError {
    CoreError::Conflict(format!("{ALREADY_LIKED} (entry {entry_id})"))
}

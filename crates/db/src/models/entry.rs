//! Guestbook entry model and DTOs.

use guestbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `boards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub author_name: String,
    /// Plaintext, compared verbatim on delete. Never leaves the server.
    #[serde(skip_serializing)]
    pub password: String,
    pub comment: String,
    pub likes: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An entry as seen by one visitor session.
///
/// `liked_by_me` drives the disabled state of the like control.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: Entry,
    pub liked_by_me: bool,
}

impl EntryView {
    pub fn new(entry: Entry, liked_by_me: bool) -> Self {
        Self { entry, liked_by_me }
    }
}

/// Payload returned after a successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedEntry {
    pub id: DbId,
    pub author_name: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Reads a JSON `null` the same way as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// DTO for submitting a new entry. Absent or `null` fields deserialize as
/// empty and are rejected by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub author_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub comment: String,
}

/// DTO for the password-confirmed delete.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

/// Outcome of a like attempt that reached the database.
#[derive(Debug, Clone)]
pub enum LikeOutcome {
    /// The like was recorded; carries the entry with its new count.
    Liked(Entry),
    /// The `(entry, session)` pair already exists. Nothing was written.
    AlreadyLiked,
    /// No entry with that id. Nothing was written.
    EntryNotFound,
}

//! Visitor session identifiers.
//!
//! A session is an ephemeral per-visit identity whose only job is to gate
//! duplicate likes. Ids are random v4 UUIDs issued by the server and echoed
//! back by the client in the [`SESSION_HEADER`] header.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;

/// Request header carrying the visitor's session id.
pub const SESSION_HEADER: &str = "x-session-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Issue a fresh random session id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a session id received from a client.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| CoreError::Validation(format!("Invalid session id '{raw}'")))
    }
}

/// Hyphenated lowercase form, which is also the stored form.
impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

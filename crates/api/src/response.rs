//! Success envelopes for API handlers.
//!
//! Reads return `{ "data": ... }`. Mutations the visitor should be told
//! about (submit, like, delete) add a human-readable `message`, the
//! acknowledgment the page shows after the action.

use serde::Serialize;

/// `{ "data": T }`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "message": "..." }`.
#[derive(Debug, Serialize)]
pub struct AckResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

impl<T: Serialize> AckResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

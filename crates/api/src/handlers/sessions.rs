//! Visitor session issuance.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use guestbook_core::session::SessionId;
use serde::Serialize;

use crate::response::DataResponse;

/// Payload for a freshly issued session.
#[derive(Debug, Serialize)]
pub struct IssuedSession {
    pub session_id: SessionId,
}

/// POST /api/v1/sessions
///
/// Hands out a random session id for the client to echo back in the
/// `x-session-id` header. Nothing is stored server-side.
pub async fn create_session() -> impl IntoResponse {
    let session_id = SessionId::generate();

    tracing::debug!(%session_id, "Visitor session issued");

    (
        StatusCode::CREATED,
        Json(DataResponse {
            data: IssuedSession { session_id },
        }),
    )
}

//! Visitor session extractor for Axum handlers.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use guestbook_core::error::CoreError;
use guestbook_core::session::{SessionId, SESSION_HEADER};

use crate::error::AppError;

/// The calling visitor's session, read from the [`SESSION_HEADER`] header.
///
/// Required form rejects requests without the header (401). Use
/// `Option<VisitorSession>` on routes that work anonymously:
///
/// ```ignore
/// async fn list(session: Option<VisitorSession>) -> AppResult<Json<()>> {
///     let liked_by = session.map(|s| s.0.to_string());
///     Ok(Json(()))
/// }
/// ```
///
/// A header that is present but not a UUID is rejected (400) in both forms.
#[derive(Debug, Clone, Copy)]
pub struct VisitorSession(pub SessionId);

impl VisitorSession {
    /// Stored form of the session id, as written to `like_records.session_id`.
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

fn read_session_header(parts: &Parts) -> Result<Option<VisitorSession>, AppError> {
    let Some(value) = parts.headers.get(SESSION_HEADER) else {
        return Ok(None);
    };

    let raw = value.to_str().map_err(|_| {
        AppError::BadRequest(format!("{SESSION_HEADER} header must be visible ASCII"))
    })?;

    Ok(Some(VisitorSession(SessionId::parse(raw)?)))
}

impl<S> FromRequestParts<S> for VisitorSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        read_session_header(parts)?.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(format!(
                "Missing {SESSION_HEADER} header. Request one from POST /api/v1/sessions"
            )))
        })
    }
}

impl<S> OptionalFromRequestParts<S> for VisitorSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        read_session_header(parts)
    }
}

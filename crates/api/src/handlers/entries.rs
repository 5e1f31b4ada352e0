//! Handlers for guestbook entries: submit, list, fetch, like, and
//! password-confirmed delete.

use std::collections::HashSet;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use guestbook_core::error::CoreError;
use guestbook_core::guestbook;
use guestbook_core::types::DbId;
use guestbook_db::models::entry::{
    CreateEntry, DeleteEntry, DeletedEntry, Entry, EntryView, LikeOutcome,
};
use guestbook_db::repositories::{EntryRepo, LikeRecordRepo};
use guestbook_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::payload::{AppJson, AppPath};
use crate::middleware::session::VisitorSession;
use crate::response::{AckResponse, DataResponse};
use crate::state::AppState;

fn entry_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Entry", id })
}

async fn ensure_entry_exists(pool: &DbPool, id: DbId) -> AppResult<Entry> {
    EntryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| entry_not_found(id))
}

/// Whether the (optional) session has liked `entry_id`.
async fn liked_by(
    pool: &DbPool,
    session: Option<VisitorSession>,
    entry_id: DbId,
) -> AppResult<bool> {
    match session {
        Some(session) => Ok(LikeRecordRepo::exists(pool, entry_id, &session.key()).await?),
        None => Ok(false),
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// POST /api/v1/entries
///
/// All three fields are required. Nothing is written when any is empty.
pub async fn create_entry(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEntry>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|errors| guestbook::missing_fields_error(&errors))?;

    let entry = EntryRepo::create(&state.pool, &input).await?;

    tracing::info!(entry_id = entry.id, author = %entry.author_name, "Guestbook entry created");

    Ok((
        StatusCode::CREATED,
        Json(AckResponse::new(
            EntryView::new(entry, false),
            guestbook::SUBMISSION_ACK,
        )),
    ))
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/entries
///
/// Every entry, newest first, flagged with whether the caller's session
/// already liked it.
pub async fn list_entries(
    State(state): State<AppState>,
    session: Option<VisitorSession>,
) -> AppResult<impl IntoResponse> {
    let entries = EntryRepo::list_newest_first(&state.pool).await?;

    let liked = match session {
        Some(session) => LikeRecordRepo::liked_entry_ids(&state.pool, &session.key()).await?,
        None => HashSet::new(),
    };

    let views: Vec<EntryView> = entries
        .into_iter()
        .map(|entry| {
            let liked_by_me = liked.contains(&entry.id);
            EntryView::new(entry, liked_by_me)
        })
        .collect();

    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    session: Option<VisitorSession>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = ensure_entry_exists(&state.pool, id).await?;
    let liked_by_me = liked_by(&state.pool, session, id).await?;

    Ok(Json(DataResponse {
        data: EntryView::new(entry, liked_by_me),
    }))
}

// ---------------------------------------------------------------------------
// Like
// ---------------------------------------------------------------------------

/// POST /api/v1/entries/{id}/like
///
/// One like per session per entry. A repeat is a 409 and writes nothing,
/// whether caught by the pre-check or by the unique constraint.
pub async fn like_entry(
    session: VisitorSession,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_entry_exists(&state.pool, id).await?;

    let key = session.key();
    if LikeRecordRepo::exists(&state.pool, id, &key).await? {
        tracing::info!(entry_id = id, session_id = %key, "Duplicate like ignored");
        return Err(guestbook::already_liked(id).into());
    }

    match EntryRepo::like(&state.pool, id, &key).await? {
        LikeOutcome::Liked(entry) => {
            tracing::info!(entry_id = id, session_id = %key, likes = entry.likes, "Entry liked");
            Ok(Json(AckResponse::new(
                EntryView::new(entry, true),
                guestbook::LIKE_ACK,
            )))
        }
        LikeOutcome::AlreadyLiked => {
            tracing::warn!(
                entry_id = id,
                session_id = %key,
                "Concurrent duplicate like rejected by constraint",
            );
            Err(guestbook::already_liked(id).into())
        }
        LikeOutcome::EntryNotFound => Err(entry_not_found(id)),
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /api/v1/entries/{id}
///
/// Body: `{ "password": "..." }`. Removes the entry and its like records
/// only when the password matches exactly.
pub async fn delete_entry(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<DeleteEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = ensure_entry_exists(&state.pool, id).await?;

    if let Err(err) = guestbook::verify_password(&entry.password, &input.password) {
        tracing::info!(entry_id = id, "Delete rejected: password mismatch");
        return Err(err.into());
    }

    if !EntryRepo::delete(&state.pool, id).await? {
        return Err(entry_not_found(id));
    }

    tracing::info!(entry_id = id, author = %entry.author_name, "Guestbook entry deleted");

    let message = guestbook::deletion_ack(&entry.author_name);
    Ok(Json(AckResponse::new(
        DeletedEntry {
            id,
            author_name: entry.author_name,
        },
        message,
    )))
}

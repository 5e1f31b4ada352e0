//! Route definitions for guestbook entries, mounted at `/entries`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// ```text
/// GET    /               -> list_entries
/// POST   /               -> create_entry
/// GET    /{id}           -> get_entry
/// DELETE /{id}           -> delete_entry
/// POST   /{id}/like      -> like_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entries::list_entries).post(entries::create_entry))
        .route(
            "/{id}",
            get(entries::get_entry).delete(entries::delete_entry),
        )
        .route("/{id}/like", post(entries::like_entry))
}

pub mod entries;
pub mod health;
pub mod sessions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                  issue a visitor session id (POST)
///
/// /entries                   list (GET), submit (POST)
/// /entries/{id}              get (GET), password-confirmed delete (DELETE)
/// /entries/{id}/like         like once per session (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sessions", sessions::router())
        .nest("/entries", entries::router())
}

//! Repository for the `like_records` table.
//!
//! Inserts happen inside [`EntryRepo::like`](crate::repositories::EntryRepo::like)
//! so the counter and the record move together; this repo only reads.

use std::collections::HashSet;

use guestbook_core::types::DbId;
use sqlx::SqlitePool;

/// Provides read access to per-session like markers.
pub struct LikeRecordRepo;

impl LikeRecordRepo {
    /// Whether `session_id` has already liked `entry_id`.
    pub async fn exists(
        pool: &SqlitePool,
        entry_id: DbId,
        session_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM like_records WHERE entry_id = ? AND session_id = ?")
                .bind(entry_id)
                .bind(session_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }

    /// IDs of every entry the session has liked.
    pub async fn liked_entry_ids(
        pool: &SqlitePool,
        session_id: &str,
    ) -> Result<HashSet<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT entry_id FROM like_records WHERE session_id = ?")
                .bind(session_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}

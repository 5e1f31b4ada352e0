//! Repository for the `boards` table.
//!
//! Likes and deletes touch `like_records` as well; both run in a single
//! transaction so the like counter never drifts from the record count.

use guestbook_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::entry::{CreateEntry, Entry, LikeOutcome};

/// Column list for `boards` queries.
const COLUMNS: &str = "id, author_name, password, comment, likes, created_at, updated_at";

/// Provides CRUD operations for guestbook entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry with a zero like count, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateEntry) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO boards (author_name, password, comment) \
             VALUES (?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(&input.author_name)
            .bind(&input.password)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards WHERE id = ?");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every entry, most recent first.
    pub async fn list_newest_first(pool: &SqlitePool) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards ORDER BY id DESC");
        sqlx::query_as::<_, Entry>(&query).fetch_all(pool).await
    }

    /// Record a like from `session_id` and bump the entry's counter.
    ///
    /// The like record is inserted first. A uniqueness violation means the
    /// session already liked the entry (possibly by winning a race against
    /// the caller's pre-check); the transaction is rolled back and
    /// [`LikeOutcome::AlreadyLiked`] is returned. A foreign-key violation or
    /// a missing row on the counter update yields
    /// [`LikeOutcome::EntryNotFound`].
    pub async fn like(
        pool: &SqlitePool,
        id: DbId,
        session_id: &str,
    ) -> Result<LikeOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let inserted = sqlx::query("INSERT INTO like_records (entry_id, session_id) VALUES (?, ?)")
            .bind(id)
            .bind(session_id)
            .execute(&mut *tx)
            .await;

        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::debug!(entry_id = id, session_id, "Like rejected by unique constraint");
                return Ok(LikeOutcome::AlreadyLiked);
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                return Ok(LikeOutcome::EntryNotFound);
            }
            Err(e) => return Err(e),
        }

        let query = format!(
            "UPDATE boards SET likes = likes + 1 \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        match entry {
            Some(entry) => {
                tx.commit().await?;
                Ok(LikeOutcome::Liked(entry))
            }
            // Dropping `tx` rolls back the orphaned like record.
            None => Ok(LikeOutcome::EntryNotFound),
        }
    }

    /// Delete an entry and all of its like records.
    ///
    /// The explicit `like_records` delete does not rely on the connection
    /// having foreign keys enabled. Returns `true` if an entry was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM like_records WHERE entry_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MovieRequestVote {
    pub id: i64,
    pub request_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a toggle: the vote row was added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteToggle {
    Added,
    Removed,
}

impl MovieRequestVote {
    pub async fn find(pool: &SqlitePool, request_id: i64, user_id: i64) -> Result<Option<MovieRequestVote>, DatabaseError> {
        let vote = sqlx::query_as::<_, MovieRequestVote>(
            "SELECT id, request_id, user_id, created_at FROM movie_request_votes
             WHERE request_id = ? AND user_id = ?",
        )
        .bind(request_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(vote)
    }

    pub async fn count(pool: &SqlitePool, request_id: i64) -> Result<i64, DatabaseError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie_request_votes WHERE request_id = ?")
            .bind(request_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Flip `user_id`'s vote on `request_id` inside one transaction.
    ///
    /// The delete runs first; only when it removed nothing is the row inserted.
    /// `UNIQUE (request_id, user_id)` plus `ON CONFLICT DO NOTHING` means two
    /// racing toggles can never leave duplicate rows behind.
    pub async fn toggle(pool: &SqlitePool, request_id: i64, user_id: i64) -> Result<VoteToggle, DatabaseError> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query("DELETE FROM movie_request_votes WHERE request_id = ? AND user_id = ?")
            .bind(request_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let outcome = if removed > 0 {
            VoteToggle::Removed
        } else {
            sqlx::query(
                "INSERT INTO movie_request_votes (request_id, user_id, created_at) VALUES (?, ?, ?)
                 ON CONFLICT (request_id, user_id) DO NOTHING",
            )
            .bind(request_id)
            .bind(user_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
            VoteToggle::Added
        };

        tx.commit().await?;
        Ok(outcome)
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MovieRequest {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A request as shown on the requests page, annotated for one viewer
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MovieRequestSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub vote_count: i64,
    pub user_has_voted: bool,
}

impl MovieRequest {
    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<MovieRequest>, DatabaseError> {
        let request = sqlx::query_as::<_, MovieRequest>(
            "SELECT id, name, description, user_id, created_at FROM movie_requests WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(request)
    }

    pub async fn get_404(pool: &SqlitePool, id: i64) -> Result<MovieRequest, DatabaseError> {
        Self::find(pool, id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("movie request {} not found", id)))
    }

    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        name: &str,
        description: &str,
    ) -> Result<MovieRequest, DatabaseError> {
        let request = sqlx::query_as::<_, MovieRequest>(
            "INSERT INTO movie_requests (name, description, user_id, created_at) VALUES (?, ?, ?, ?)
             RETURNING id, name, description, user_id, created_at",
        )
        .bind(name)
        .bind(description)
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(request)
    }

    /// Every request, newest first, with its vote total and whether `viewer_id`
    /// has voted on it. Both annotations are correlated subqueries so the page
    /// costs one round trip.
    pub async fn list_with_votes(pool: &SqlitePool, viewer_id: i64) -> Result<Vec<MovieRequestSummary>, DatabaseError> {
        let requests = sqlx::query_as::<_, MovieRequestSummary>(
            "SELECT r.id, r.name, r.description, r.user_id, u.username, r.created_at,
                    (SELECT COUNT(*) FROM movie_request_votes v WHERE v.request_id = r.id) AS vote_count,
                    EXISTS (
                        SELECT 1 FROM movie_request_votes v
                        WHERE v.request_id = r.id AND v.user_id = ?
                    ) AS user_has_voted
             FROM movie_requests r
             JOIN users u ON u.id = r.user_id
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(viewer_id)
        .fetch_all(pool)
        .await?;

        Ok(requests)
    }

    /// Delete only when `user_id` owns the request; votes cascade.
    pub async fn delete_owned(pool: &SqlitePool, id: i64, user_id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM movie_requests WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("movie request {} not found", id)));
        }
        Ok(())
    }
}

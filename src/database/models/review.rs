use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub comment: String,
    pub movie_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Review joined with its author's username, as listed on a movie page
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewWithAuthor {
    pub id: i64,
    pub comment: String,
    pub movie_id: i64,
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Review>, DatabaseError> {
        let review = sqlx::query_as::<_, Review>(
            "SELECT id, comment, movie_id, user_id, created_at FROM reviews WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(review)
    }

    pub async fn get_404(pool: &SqlitePool, id: i64) -> Result<Review, DatabaseError> {
        Self::find(pool, id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("review {} not found", id)))
    }

    pub async fn for_movie(pool: &SqlitePool, movie_id: i64) -> Result<Vec<ReviewWithAuthor>, DatabaseError> {
        let reviews = sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, r.comment, r.movie_id, r.user_id, u.username, r.created_at
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.movie_id = ?
             ORDER BY r.created_at, r.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;

        Ok(reviews)
    }

    pub async fn create(pool: &SqlitePool, movie_id: i64, user_id: i64, comment: &str) -> Result<Review, DatabaseError> {
        let review = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (comment, movie_id, user_id, created_at) VALUES (?, ?, ?, ?)
             RETURNING id, comment, movie_id, user_id, created_at",
        )
        .bind(comment)
        .bind(movie_id)
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(review)
    }

    pub async fn update_comment(pool: &SqlitePool, id: i64, comment: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE reviews SET comment = ? WHERE id = ?")
            .bind(comment)
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("review {} not found", id)));
        }
        Ok(())
    }

    /// Delete only when `user_id` owns the review. Anything else, including a
    /// missing review, is `NotFound` so callers cannot probe for ownership.
    pub async fn delete_owned(pool: &SqlitePool, id: i64, user_id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("review {} not found", id)));
        }
        Ok(())
    }
}

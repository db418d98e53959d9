use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: Option<String>,
}

/// Fields for a catalogue entry; movies are only created through the admin CLI.
#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: Option<String>,
}

impl Movie {
    /// All movies, or only those whose name contains `search` ignoring case.
    /// An empty search term lists everything.
    ///
    /// Matching is done here rather than with `LIKE`, which only folds ASCII.
    pub async fn list(pool: &SqlitePool, search: Option<&str>) -> Result<Vec<Movie>, DatabaseError> {
        let movies = sqlx::query_as::<_, Movie>("SELECT id, name, price, description, image FROM movies ORDER BY id")
            .fetch_all(pool)
            .await?;

        let Some(term) = search.filter(|s| !s.is_empty()) else {
            return Ok(movies);
        };
        let term = term.to_lowercase();
        Ok(movies
            .into_iter()
            .filter(|movie| movie.name.to_lowercase().contains(&term))
            .collect())
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Movie>, DatabaseError> {
        let movie = sqlx::query_as::<_, Movie>("SELECT id, name, price, description, image FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(movie)
    }

    pub async fn get_404(pool: &SqlitePool, id: i64) -> Result<Movie, DatabaseError> {
        Self::find(pool, id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("movie {} not found", id)))
    }

    pub async fn create(pool: &SqlitePool, new: &NewMovie) -> Result<Movie, DatabaseError> {
        let movie = sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (name, price, description, image) VALUES (?, ?, ?, ?)
             RETURNING id, name, price, description, image",
        )
        .bind(&new.name)
        .bind(new.price)
        .bind(&new.description)
        .bind(&new.image)
        .fetch_one(pool)
        .await?;

        Ok(movie)
    }

    /// Returns false when no movie had that id. Reviews go with it.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

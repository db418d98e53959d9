// handlers/public/movies.rs - Movie catalogue pages (no login required)

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Extension,
};
use serde::Deserialize;

use crate::database::models::{Movie, Review};
use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    /// Case-insensitive substring of the movie name
    pub search: Option<String>,
}

/// GET / - List movies, optionally filtered by `?search=`
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
    user: Option<Extension<CurrentUser>>,
) -> AppResult<Html<String>> {
    let search = query.search.as_deref().filter(|s| !s.is_empty());
    let movies = Movie::list(&state.pool, search).await?;

    let user = user.as_ref().map(|Extension(u)| u);
    Ok(Html(views::movies::index(&movies, search, user)))
}

/// GET /:id/ - Movie detail page with its reviews
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    user: Option<Extension<CurrentUser>>,
) -> AppResult<Html<String>> {
    let movie = Movie::get_404(&state.pool, id).await?;
    let reviews = Review::for_movie(&state.pool, movie.id).await?;

    let user = user.as_ref().map(|Extension(u)| u);
    Ok(Html(views::movies::show(&movie, &reviews, user)))
}

// handlers/protected/requests.rs - Movie requests and voting (login required)

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Extension, Form,
};
use serde::Deserialize;

use crate::database::models::{MovieRequest, MovieRequestVote, VoteToggle};
use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::urls;
use crate::views;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MovieRequestForm {
    pub name: String,
    pub description: String,
}

/// GET /requests/ - Every request, newest first, with vote counts and the
/// viewer's own vote state
pub async fn movie_requests_get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Html<String>> {
    let requests = MovieRequest::list_with_votes(&state.pool, user.id).await?;
    Ok(Html(views::requests::movie_requests(&requests, &user)))
}

/// POST /requests/ - Create a request when both trimmed fields are non-empty
pub async fn movie_requests_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<MovieRequestForm>,
) -> AppResult<Redirect> {
    let name = form.name.trim();
    let description = form.description.trim();

    if !name.is_empty() && !description.is_empty() {
        let request = MovieRequest::create(&state.pool, user.id, name, description).await?;
        tracing::info!("User {} requested '{}' (request {})", user.id, request.name, request.id);
    }

    Ok(Redirect::to(urls::MOVIE_REQUESTS))
}

/// POST /requests/:id/delete/ - Owner only, otherwise 404
pub async fn delete_movie_request_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    MovieRequest::delete_owned(&state.pool, id, user.id).await?;
    tracing::info!("User {} deleted movie request {}", user.id, id);

    Ok(Redirect::to(urls::MOVIE_REQUESTS))
}

/// GET /requests/:id/vote/ - Voting needs a POST; back to the list
pub async fn vote_movie_request_get() -> Redirect {
    Redirect::to(urls::MOVIE_REQUESTS)
}

/// POST /requests/:id/vote/ - Toggle the current user's vote on an existing request
pub async fn vote_movie_request_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    let request = MovieRequest::get_404(&state.pool, id).await?;

    match MovieRequestVote::toggle(&state.pool, request.id, user.id).await? {
        VoteToggle::Added => tracing::info!("User {} voted for movie request {}", user.id, request.id),
        VoteToggle::Removed => tracing::info!("User {} withdrew vote on movie request {}", user.id, request.id),
    }

    Ok(Redirect::to(urls::MOVIE_REQUESTS))
}

// handlers/protected/reviews.rs - Review create/edit/delete (login required)

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::database::models::{Movie, Review};
use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::urls;
use crate::views;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReviewForm {
    pub comment: String,
}

/// GET /:id/review/create/ - Nothing to show; back to the movie
pub async fn create_review_get(Path(id): Path<i64>) -> Redirect {
    Redirect::to(&urls::movie_show(id))
}

/// POST /:id/review/create/ - Add a review by the current user.
/// An empty comment is ignored.
pub async fn create_review_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Form(form): Form<ReviewForm>,
) -> AppResult<Redirect> {
    if !form.comment.is_empty() {
        let movie = Movie::get_404(&state.pool, id).await?;
        let review = Review::create(&state.pool, movie.id, user.id, &form.comment).await?;
        tracing::info!("User {} reviewed movie {} (review {})", user.id, movie.id, review.id);
    }

    Ok(Redirect::to(&urls::movie_show(id)))
}

/// GET /:id/review/:review_id/edit/ - Edit form, owner only.
///
/// The review is looked up by `review_id` alone; `id` only decides where to
/// send the user back to. Non-owners are redirected without an error.
pub async fn edit_review_get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, review_id)): Path<(i64, i64)>,
) -> AppResult<Response> {
    let review = Review::get_404(&state.pool, review_id).await?;
    if review.user_id != user.id {
        tracing::warn!("User {} may not edit review {}", user.id, review.id);
        return Ok(Redirect::to(&urls::movie_show(id)).into_response());
    }

    Ok(Html(views::movies::edit_review(id, &review, Some(&user))).into_response())
}

/// POST /:id/review/:review_id/edit/ - Save a new comment, owner only.
pub async fn edit_review_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, review_id)): Path<(i64, i64)>,
    Form(form): Form<ReviewForm>,
) -> AppResult<Redirect> {
    let review = Review::get_404(&state.pool, review_id).await?;
    if review.user_id != user.id {
        tracing::warn!("User {} may not edit review {}", user.id, review.id);
        return Ok(Redirect::to(&urls::movie_show(id)));
    }

    if !form.comment.is_empty() {
        Review::update_comment(&state.pool, review.id, &form.comment).await?;
        tracing::info!("User {} updated review {}", user.id, review.id);
    }

    Ok(Redirect::to(&urls::movie_show(id)))
}

/// POST /:id/review/:review_id/delete/ - 404 unless the review exists and
/// belongs to the current user.
pub async fn delete_review_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, review_id)): Path<(i64, i64)>,
) -> AppResult<Redirect> {
    Review::delete_owned(&state.pool, review_id, user.id).await?;
    tracing::info!("User {} deleted review {}", user.id, review_id);

    Ok(Redirect::to(&urls::movie_show(id)))
}

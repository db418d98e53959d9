use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{protected, public};
use crate::middleware::{identify_user, require_login};
use crate::AppState;

/// The whole application: public and protected route groups, with the
/// session identified once for every request.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(movie_routes())
        .merge(account_routes())
        .merge(protected_routes())
        .route("/health", get(public::health))
        .layer(middleware::from_fn_with_state(state.clone(), identify_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::index))
        .route("/:id/", get(public::show))
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts/login/", get(public::login_get).post(public::login_post))
        .route("/accounts/logout/", post(public::logout_post))
        .route("/accounts/signup/", get(public::signup_get).post(public::signup_post))
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        // Reviews
        .route(
            "/:id/review/create/",
            get(protected::create_review_get).post(protected::create_review_post),
        )
        .route(
            "/:id/review/:review_id/edit/",
            get(protected::edit_review_get).post(protected::edit_review_post),
        )
        .route("/:id/review/:review_id/delete/", post(protected::delete_review_post))
        // Movie requests
        .route(
            "/requests/",
            get(protected::movie_requests_get).post(protected::movie_requests_post),
        )
        .route("/requests/:id/delete/", post(protected::delete_movie_request_post))
        .route(
            "/requests/:id/vote/",
            get(protected::vote_movie_request_get).post(protected::vote_movie_request_post),
        )
        .route_layer(middleware::from_fn(require_login))
}

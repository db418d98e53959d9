// handlers/protected/mod.rs - Handlers behind the login gate
//
// Every route here is wrapped in `middleware::require_login`, so handlers can
// take `Extension<CurrentUser>` without checking for it.

pub mod requests;
pub mod reviews;

pub use requests::{
    delete_movie_request_post, movie_requests_get, movie_requests_post, vote_movie_request_get,
    vote_movie_request_post,
};
pub use reviews::{create_review_get, create_review_post, delete_review_post, edit_review_get, edit_review_post};

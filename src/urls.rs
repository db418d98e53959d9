// Named routes. Handlers redirect through these and views link through them,
// so a path changes in one place.

pub const MOVIES_INDEX: &str = "/";
pub const MOVIE_REQUESTS: &str = "/requests/";
pub const LOGIN: &str = "/accounts/login/";
pub const LOGOUT: &str = "/accounts/logout/";
pub const SIGNUP: &str = "/accounts/signup/";

pub fn movie_show(id: i64) -> String {
    format!("/{}/", id)
}

pub fn create_review(movie_id: i64) -> String {
    format!("/{}/review/create/", movie_id)
}

pub fn edit_review(movie_id: i64, review_id: i64) -> String {
    format!("/{}/review/{}/edit/", movie_id, review_id)
}

pub fn delete_review(movie_id: i64, review_id: i64) -> String {
    format!("/{}/review/{}/delete/", movie_id, review_id)
}

pub fn delete_movie_request(id: i64) -> String {
    format!("/requests/{}/delete/", id)
}

pub fn vote_movie_request(id: i64) -> String {
    format!("/requests/{}/vote/", id)
}

/// Login page that returns to `next` afterwards
pub fn login_with_next(next: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(next.as_bytes()).collect();
    format!("{}?next={}", LOGIN, encoded)
}

/// Only same-site absolute paths are accepted as post-login targets.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
        _ => MOVIES_INDEX,
    }
}

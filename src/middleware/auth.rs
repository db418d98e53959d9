use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use cookie::{time::Duration, Cookie, CookieBuilder, SameSite};

use crate::auth::{self, Claims};
use crate::config;
use crate::database::models::User;
use crate::urls;
use crate::AppState;

/// The logged-in user, resolved from the session cookie and checked against the users table
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Runs on every route. Attaches `CurrentUser` to the request when the session
/// token is valid and its user still exists; otherwise the request continues
/// anonymously.
pub async fn identify_user(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let cookie_name = &config::config().security.session_cookie;

    if let Some(token) = extract_session_token(request.headers(), cookie_name) {
        match auth::validate_jwt(&token) {
            Ok(Claims { user_id, .. }) => match User::find(&state.pool, user_id).await {
                Ok(Some(user)) => {
                    request.extensions_mut().insert(CurrentUser::from(user));
                }
                Ok(None) => tracing::debug!("Session refers to missing user {}", user_id),
                Err(e) => tracing::error!("Failed to load session user {}: {}", user_id, e),
            },
            Err(e) => tracing::debug!("Ignoring session token: {}", e),
        }
    }

    next.run(request).await
}

/// Gate for protected routes: anonymous requests are sent to the login page
/// with the original path as `next`.
pub async fn require_login(request: Request, next: Next) -> Response {
    if request.extensions().get::<CurrentUser>().is_some() {
        return next.run(request).await;
    }

    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or(urls::MOVIES_INDEX);
    tracing::debug!("Login required for {} {}", request.method(), path);

    Redirect::to(&urls::login_with_next(path)).into_response()
}

/// Session token from the session cookie, falling back to a Bearer Authorization header
fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let from_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == cookie_name)
        .map(|cookie| cookie.value_trimmed().to_string())
        .filter(|value| !value.is_empty());

    from_cookie.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    })
}

/// `Set-Cookie` value storing a session token
pub fn session_cookie(token: &str) -> String {
    let security = &config::config().security;
    let max_age = Duration::hours(security.jwt_expiry_hours as i64);

    base_cookie(&security.session_cookie, token.to_string())
        .max_age(max_age)
        .secure(security.secure_cookies)
        .build()
        .to_string()
}

/// `Set-Cookie` value that expires the session cookie
pub fn clear_session_cookie() -> String {
    let security = &config::config().security;

    base_cookie(&security.session_cookie, String::new())
        .max_age(Duration::ZERO)
        .build()
        .to_string()
}

fn base_cookie(name: &str, value: String) -> CookieBuilder<'static> {
    Cookie::build((name.to_string(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
}

// handlers/public/accounts.rs - Login, logout and signup pages
//
// The session is a signed JWT carried in an HttpOnly cookie; these handlers
// are the only place one is issued or cleared.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::auth::{self, Claims};
use crate::database::models::User;
use crate::database::DatabaseError;
use crate::error::AppResult;
use crate::middleware::{clear_session_cookie, session_cookie};
use crate::urls;
use crate::views;
use crate::AppState;

const MAX_USERNAME_LEN: usize = 150;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

/// GET /accounts/login/
pub async fn login_get(Query(query): Query<LoginQuery>) -> Html<String> {
    let next = query.next.unwrap_or_default();
    Html(views::accounts::login("", &next, None))
}

/// POST /accounts/login/ - Verify credentials, set the session cookie and
/// continue to `next`. Bad credentials re-render the form.
pub async fn login_post(State(state): State<AppState>, Form(form): Form<LoginForm>) -> AppResult<Response> {
    let username = form.username.trim();
    let next = form.next.as_deref().unwrap_or_default();

    let user = match User::find_by_username(&state.pool, username).await? {
        Some(user) if auth::verify_password(&form.password, &user.password_hash) => user,
        _ => {
            tracing::warn!("Failed login for '{}'", username);
            let page = views::accounts::login(
                username,
                next,
                Some("Please enter a correct username and password."),
            );
            return Ok(Html(page).into_response());
        }
    };

    tracing::info!("User '{}' logged in", user.username);
    start_session(user, urls::safe_next(Some(next)))
}

/// POST /accounts/logout/
pub async fn logout_post() -> Response {
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to(urls::MOVIES_INDEX),
    )
        .into_response()
}

/// GET /accounts/signup/
pub async fn signup_get() -> Html<String> {
    Html(views::accounts::signup("", &[]))
}

/// POST /accounts/signup/ - Create an account and log straight in
pub async fn signup_post(State(state): State<AppState>, Form(form): Form<SignupForm>) -> AppResult<Response> {
    let username = form.username.trim();
    let mut errors = validate_signup(username, &form.password1, &form.password2);

    if errors.is_empty() {
        let password_hash = auth::hash_password(&form.password1)?;
        match User::create(&state.pool, username, &password_hash).await {
            Ok(user) => {
                tracing::info!("Created user '{}' (id {})", user.username, user.id);
                return start_session(user, urls::MOVIES_INDEX);
            }
            Err(DatabaseError::Conflict(_)) => {
                errors.push("A user with that username already exists.".to_string());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(Html(views::accounts::signup(username, &errors)).into_response())
}

fn start_session(user: User, destination: &str) -> AppResult<Response> {
    let token = auth::generate_jwt(Claims::new(user.id, user.username))?;
    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Redirect::to(destination),
    )
        .into_response())
}

fn validate_signup(username: &str, password1: &str, password2: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if username.is_empty() {
        errors.push("Username is required.".to_string());
    } else if username.chars().count() > MAX_USERNAME_LEN {
        errors.push(format!("Username must be at most {} characters.", MAX_USERNAME_LEN));
    } else if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        errors.push("Username may contain only letters, digits and @/./+/-/_ characters.".to_string());
    }

    if password1.is_empty() {
        errors.push("Password is required.".to_string());
    } else if password1 != password2 {
        errors.push("The two password fields didn't match.".to_string());
    }

    errors
}

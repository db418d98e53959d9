pub mod auth;

pub use auth::{clear_session_cookie, identify_user, require_login, session_cookie, CurrentUser};

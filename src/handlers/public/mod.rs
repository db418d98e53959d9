// handlers/public/mod.rs - Handlers reachable without logging in

pub mod accounts;
pub mod health;
pub mod movies;

pub use accounts::{login_get, login_post, logout_post, signup_get, signup_post};
pub use health::health;
pub use movies::{index, show};

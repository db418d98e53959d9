#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, LOCATION};
use reqwest::{redirect, Client, Response};
use sqlx::SqlitePool;

use movies_web::auth::{self, Claims};
use movies_web::config;
use movies_web::database::models::{Movie, NewMovie, User};
use movies_web::database::DatabaseManager;
use movies_web::AppState;

pub const PASSWORD: &str = "correct horse battery staple";

/// The real router served on a free port against a private in-memory database
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub pool: SqlitePool,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        let pool = DatabaseManager::connect_memory().await?;

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        let app = movies_web::app(AppState::new(pool.clone()));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server crashed");
        });

        Ok(Self { port, base_url, pool })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Client without a session; redirects are returned, not followed
    pub fn anonymous(&self) -> Client {
        Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("reqwest client")
    }

    /// Client carrying a session cookie for `user`
    pub fn client_for(&self, user: &User) -> Result<Client> {
        let token = auth::generate_jwt(Claims::new(user.id, user.username.clone()))?;
        let cookie = format!("{}={}", config::config().security.session_cookie, token);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(&cookie)?);

        Ok(Client::builder()
            .redirect(redirect::Policy::none())
            .default_headers(headers)
            .build()?)
    }

    pub async fn create_user(&self, username: &str) -> Result<User> {
        Ok(User::create(&self.pool, username, &auth::hash_password(PASSWORD)?).await?)
    }

    pub async fn create_movie(&self, name: &str) -> Result<Movie> {
        let movie = Movie::create(
            &self.pool,
            &NewMovie {
                name: name.to_string(),
                price: 10,
                description: format!("About {}", name),
                image: None,
            },
        )
        .await?;
        Ok(movie)
    }
}

/// Location header of a redirect response
pub fn location(res: &Response) -> String {
    res.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

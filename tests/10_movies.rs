mod common;

use anyhow::Result;
use reqwest::StatusCode;

use movies_web::database::models::Review;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.anonymous().get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await?;
    assert!(body.contains("\"database\":\"ok\""), "unexpected body: {}", body);
    Ok(())
}

#[tokio::test]
async fn index_lists_every_movie_without_search() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    server.create_movie("Avatar").await?;
    server.create_movie("Inception").await?;

    let res = server.anonymous().get(server.url("/")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await?;
    assert!(body.contains("Avatar"));
    assert!(body.contains("Inception"));
    Ok(())
}

#[tokio::test]
async fn search_filters_case_insensitively() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let avatar = server.create_movie("Avatar").await?;
    let avengers = server.create_movie("The Avengers").await?;
    let inception = server.create_movie("Inception").await?;

    let body = server
        .anonymous()
        .get(server.url("/?search=aV"))
        .send()
        .await?
        .text()
        .await?;

    assert!(body.contains(&format!("href=\"/{}/\"", avatar.id)));
    assert!(body.contains(&format!("href=\"/{}/\"", avengers.id)));
    assert!(!body.contains(&format!("href=\"/{}/\"", inception.id)));
    Ok(())
}

#[tokio::test]
async fn search_folds_accented_letters() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let amelie = server.create_movie("Amélie").await?;
    let amadeus = server.create_movie("Amadeus").await?;

    let body = server
        .anonymous()
        .get(server.url("/"))
        .query(&[("search", "AMÉLIE")])
        .send()
        .await?
        .text()
        .await?;

    assert!(body.contains(&format!("href=\"/{}/\"", amelie.id)));
    assert!(!body.contains(&format!("href=\"/{}/\"", amadeus.id)));
    Ok(())
}

#[tokio::test]
async fn show_renders_movie_and_reviews() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let movie = server.create_movie("Dune").await?;
    let alice = server.create_user("alice").await?;
    Review::create(&server.pool, movie.id, alice.id, "Spice must flow").await?;

    let res = server
        .anonymous()
        .get(server.url(&format!("/{}/", movie.id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await?;
    assert!(body.contains("<title>Dune</title>"));
    assert!(body.contains("Spice must flow"));
    assert!(body.contains("alice"));
    // Anonymous visitors get no review form
    assert!(!body.contains(&format!("/{}/review/create/", movie.id)));
    Ok(())
}

#[tokio::test]
async fn show_missing_movie_is_not_found() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.anonymous().get(server.url("/999/")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

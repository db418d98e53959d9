mod common;

use anyhow::Result;
use reqwest::StatusCode;

use common::location;
use movies_web::database::models::Review;

async fn review_count(server: &common::TestServer) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews")
        .fetch_one(&server.pool)
        .await?;
    Ok(count)
}

#[tokio::test]
async fn create_review_adds_one_review_owned_by_user() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let movie = server.create_movie("Dune").await?;
    let alice = server.create_user("alice").await?;

    let res = server
        .client_for(&alice)?
        .post(server.url(&format!("/{}/review/create/", movie.id)))
        .form(&[("comment", "Loved it")])
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/{}/", movie.id));

    let reviews = Review::for_movie(&server.pool, movie.id).await?;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].user_id, alice.id);
    assert_eq!(reviews[0].comment, "Loved it");
    Ok(())
}

#[tokio::test]
async fn empty_comment_is_a_silent_no_op() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let movie = server.create_movie("Dune").await?;
    let alice = server.create_user("alice").await?;
    let client = server.client_for(&alice)?;

    let res = client
        .post(server.url(&format!("/{}/review/create/", movie.id)))
        .form(&[("comment", "")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/{}/", movie.id));

    let res = client
        .get(server.url(&format!("/{}/review/create/", movie.id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/{}/", movie.id));

    assert_eq!(review_count(&server).await?, 0);
    Ok(())
}

#[tokio::test]
async fn review_on_missing_movie_is_not_found() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let alice = server.create_user("alice").await?;

    let res = server
        .client_for(&alice)?
        .post(server.url("/999/review/create/"))
        .form(&[("comment", "Loved it")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    assert_eq!(review_count(&server).await?, 0);
    Ok(())
}

#[tokio::test]
async fn empty_review_on_missing_movie_still_redirects() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let alice = server.create_user("alice").await?;

    // The movie is only looked up when there is a comment to attach
    let res = server
        .client_for(&alice)?
        .post(server.url("/999/review/create/"))
        .form(&[("comment", "")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/999/");

    assert_eq!(review_count(&server).await?, 0);
    Ok(())
}

#[tokio::test]
async fn anonymous_review_redirects_to_login() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let movie = server.create_movie("Dune").await?;

    let res = server
        .anonymous()
        .post(server.url(&format!("/{}/review/create/", movie.id)))
        .form(&[("comment", "sneaky")])
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert!(location(&res).starts_with("/accounts/login/?next="));
    assert_eq!(review_count(&server).await?, 0);
    Ok(())
}

#[tokio::test]
async fn non_owner_edit_is_redirected_and_changes_nothing() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let movie = server.create_movie("Dune").await?;
    let alice = server.create_user("alice").await?;
    let bob = server.create_user("bob").await?;
    let review = Review::create(&server.pool, movie.id, alice.id, "original").await?;
    let path = format!("/{}/review/{}/edit/", movie.id, review.id);
    let bob_client = server.client_for(&bob)?;

    let res = bob_client.get(server.url(&path)).send().await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/{}/", movie.id));

    let res = bob_client
        .post(server.url(&path))
        .form(&[("comment", "vandalised")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/{}/", movie.id));

    assert_eq!(Review::get_404(&server.pool, review.id).await?.comment, "original");
    Ok(())
}

#[tokio::test]
async fn owner_can_edit_review() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let movie = server.create_movie("Dune").await?;
    let alice = server.create_user("alice").await?;
    let review = Review::create(&server.pool, movie.id, alice.id, "first draft").await?;
    let path = format!("/{}/review/{}/edit/", movie.id, review.id);
    let client = server.client_for(&alice)?;

    let res = client.get(server.url(&path)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await?;
    assert!(body.contains("Edit Review"));
    assert!(body.contains("first draft"));

    // Empty comment leaves the review alone
    let res = client.post(server.url(&path)).form(&[("comment", "")]).send().await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(Review::get_404(&server.pool, review.id).await?.comment, "first draft");

    let res = client
        .post(server.url(&path))
        .form(&[("comment", "final cut")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/{}/", movie.id));
    assert_eq!(Review::get_404(&server.pool, review.id).await?.comment, "final cut");
    Ok(())
}

#[tokio::test]
async fn edit_missing_review_is_not_found() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let movie = server.create_movie("Dune").await?;
    let alice = server.create_user("alice").await?;

    let res = server
        .client_for(&alice)?
        .get(server.url(&format!("/{}/review/404/edit/", movie.id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn non_owner_delete_is_not_found_and_review_survives() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let movie = server.create_movie("Dune").await?;
    let alice = server.create_user("alice").await?;
    let bob = server.create_user("bob").await?;
    let review = Review::create(&server.pool, movie.id, alice.id, "keep me").await?;
    let path = format!("/{}/review/{}/delete/", movie.id, review.id);

    let res = server.client_for(&bob)?.post(server.url(&path)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(Review::find(&server.pool, review.id).await?.is_some());

    let res = server.client_for(&alice)?.post(server.url(&path)).send().await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/{}/", movie.id));
    assert!(Review::find(&server.pool, review.id).await?.is_none());
    Ok(())
}

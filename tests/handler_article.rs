//! Integration tests for the article endpoints.

mod common;

use std::sync::{atomic::Ordering, Arc};

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{make_server, make_state, StubArticleClient, StubAuthClient, StubAuthorClient};

fn server_with_articles(articles: Arc<StubArticleClient>) -> axum_test::TestServer {
    make_server(make_state(
        articles,
        Arc::new(StubAuthorClient::default()),
        Arc::new(StubAuthClient::default()),
    ))
}

#[tokio::test]
async fn test_create_article_hydrates_via_follow_up_read() {
    let articles = Arc::new(StubArticleClient::default());
    let server = server_with_articles(articles.clone());

    let response = server
        .post("/v1/article")
        .json(&json!({
            "author_id": "auth-1",
            "title": "On Gateways",
            "body": "Thin layers compose."
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Article | Created");
    // The response carries the re-read record, author joined in.
    assert_eq!(body["data"]["author"]["fullname"], "Jamila Doe");

    assert_eq!(articles.create_calls.load(Ordering::SeqCst), 1);
    assert_eq!(articles.fetch_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_create_article_upstream_failure_is_bad_request() {
    let server = server_with_articles(Arc::new(StubArticleClient::failing("article backend down")));

    let response = server
        .post("/v1/article")
        .json(&json!({
            "author_id": "auth-1",
            "title": "On Gateways",
            "body": "Thin layers compose."
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "article backend down");
}

#[tokio::test]
async fn test_create_article_hydration_failure_is_internal() {
    let articles = Arc::new(StubArticleClient::failing_fetch("record vanished"));
    let server = server_with_articles(articles.clone());

    let response = server
        .post("/v1/article")
        .json(&json!({
            "author_id": "auth-1",
            "title": "On Gateways",
            "body": "Thin layers compose."
        }))
        .await;

    // Creation succeeded upstream; losing the follow-up read is our fault.
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(articles.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_create_article_malformed_body_makes_no_rpc() {
    let articles = Arc::new(StubArticleClient::default());
    let server = server_with_articles(articles.clone());

    let response = server
        .post("/v1/article")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));

    assert_eq!(articles.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_get_article_returns_hydrated_record() {
    let server = server_with_articles(Arc::new(StubArticleClient::default()));

    let response = server.get("/v1/article/art-7").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "OK");
    assert_eq!(body["data"]["id"], "art-7");
    assert_eq!(body["data"]["author"]["id"], "auth-1");
}

#[tokio::test]
async fn test_get_article_failure_is_not_found() {
    let server = server_with_articles(Arc::new(StubArticleClient::failing("no such article")));

    let response = server.get("/v1/article/art-7").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "no such article");
}

#[tokio::test]
async fn test_list_articles_uses_configured_defaults() {
    let articles = Arc::new(StubArticleClient::default());
    let server = server_with_articles(articles.clone());

    let response = server.get("/v1/article").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let query = articles.last_list.lock().unwrap().clone().unwrap();
    assert_eq!(query.offset, 0);
    assert_eq!(query.limit, 10);
    assert_eq!(query.search, "");
}

#[tokio::test]
async fn test_list_articles_forwards_explicit_window() {
    let articles = Arc::new(StubArticleClient::default());
    let server = server_with_articles(articles.clone());

    let response = server
        .get("/v1/article")
        .add_query_param("offset", "5")
        .add_query_param("limit", "2")
        .add_query_param("search", "gateways")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let query = articles.last_list.lock().unwrap().clone().unwrap();
    assert_eq!(query.offset, 5);
    assert_eq!(query.limit, 2);
    assert_eq!(query.search, "gateways");
}

#[tokio::test]
async fn test_list_articles_bad_limit_names_the_field() {
    let articles = Arc::new(StubArticleClient::default());
    let server = server_with_articles(articles.clone());

    let response = server
        .get("/v1/article")
        .add_query_param("limit", "lots")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("limit"));

    // Rejected before any RPC.
    assert!(articles.last_list.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_list_articles_failure_is_internal() {
    let server = server_with_articles(Arc::new(StubArticleClient::failing("storage offline")));

    let response = server.get("/v1/article").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_update_article() {
    let server = server_with_articles(Arc::new(StubArticleClient::default()));

    let response = server
        .put("/v1/article")
        .json(&json!({
            "id": "art-3",
            "title": "Edited",
            "body": "New text."
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Article | Updated");
    assert_eq!(body["data"]["id"], "art-3");
    assert_eq!(body["data"]["title"], "Edited");
}

#[tokio::test]
async fn test_update_article_failure_is_bad_request() {
    let server = server_with_articles(Arc::new(StubArticleClient::failing("unknown article")));

    let response = server
        .put("/v1/article")
        .json(&json!({
            "id": "art-3",
            "title": "Edited",
            "body": "New text."
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_article_twice_reports_not_found() {
    let server = server_with_articles(Arc::new(StubArticleClient::default()));

    let first = server.delete("/v1/article/art-9").await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let body: Value = first.json();
    assert_eq!(body["message"], "Article | Deleted");

    let second = server.delete("/v1/article/art-9").await;
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);

    let body: Value = second.json();
    assert_eq!(body["error"], "article art-9 not found");
}

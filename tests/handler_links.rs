mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink::api::routes::api_routes;
use shortlink::utils::code_encoder::encode;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = api_routes().with_state(state);
    TestServer::new(app).unwrap()
}

// ─── POST /urls ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_url_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/urls")
        .json(&json!({ "originalUrl": "https://example.com/page" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["originalUrl"], "https://example.com/page");
    assert_eq!(body["shortCode"], encode(id).unwrap());
    assert_eq!(body["clickCount"], 0);
    assert!(body["createdAt"].is_string());
    assert!(body["lastAccessedAt"].is_null());
}

#[sqlx::test]
async fn test_create_url_invalid(pool: PgPool) {
    let server = make_server(pool.clone());

    for url in ["", "   ", "not a url", "/relative/path", "ftp://example.com/file"] {
        let response = server
            .post("/urls")
            .json(&json!({ "originalUrl": url }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error", "input: {url:?}");
    }

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(links, 0);
}

// ─── GET /urls ───────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_urls(pool: PgPool) {
    common::create_test_link(&pool, "https://a.example/").await;
    common::create_test_link(&pool, "https://b.example/").await;

    let server = make_server(pool);
    let response = server.get("/urls").await;

    response.assert_status_ok();
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["originalUrl"], "https://a.example/");
    assert_eq!(body[1]["originalUrl"], "https://b.example/");
}

#[sqlx::test]
async fn test_list_urls_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/urls").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

// ─── GET /urls/{id} ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_url(pool: PgPool) {
    let link = common::create_test_link(&pool, "https://example.com/").await;
    let server = make_server(pool);

    let response = server.get(&format!("/urls/{}", link.id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["shortCode"], link.short_code);

    server.get("/urls/999999").await.assert_status_not_found();
}

// ─── DELETE /urls/{id} ───────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_url(pool: PgPool) {
    let link = common::create_test_link(&pool, "https://example.com/").await;
    common::insert_access_events(&pool, link.id, chrono::Utc::now(), 2).await;

    let server = make_server(pool.clone());

    server
        .delete(&format!("/urls/{}", link.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(common::count_events(&pool, link.id).await, 0);

    // Second delete returns 404.
    let response = server.delete(&format!("/urls/{}", link.id)).await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

// ─── Malformed requests ─────────────────────────────────────────────────────

#[sqlx::test]
async fn test_non_numeric_id_returns_json_error(pool: PgPool) {
    let server = make_server(pool);

    let responses = [
        server.get("/urls/abc").await,
        server.delete("/urls/abc").await,
    ];

    for response in responses {
        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error");
        assert!(body["error"]["details"]["reason"].is_string());
    }
}

#[sqlx::test]
async fn test_create_url_non_json_body(pool: PgPool) {
    let server = make_server(pool);

    let response = server.post("/urls").text("https://example.com/").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

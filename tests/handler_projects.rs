mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use cms_service::api::handlers::{create_project_handler, list_projects_handler};
use cms_service::domain::entities::ContentKind;
use serde_json::json;
use std::sync::Arc;

fn server(store: Arc<common::InMemoryStore>) -> TestServer {
    let app = Router::new()
        .route(
            "/api/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .with_state(common::create_test_state(store));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_project_generates_slug() {
    let server = server(common::InMemoryStore::new());

    let response = server
        .post("/api/projects")
        .json(&json!({
            "title": "Harbor: Container Registry",
            "summary": "Self-hosted registry",
            "published": true
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["slug"], "harbor-container-registry");
    assert_eq!(json["title"], "Harbor: Container Registry");
    assert_eq!(json["published"], true);
    assert!(json["id"].is_number());
}

#[tokio::test]
async fn test_create_project_slug_collision_gets_suffix() {
    let store = common::InMemoryStore::new();
    store.seed(ContentKind::Project, "harbor");
    let server = server(store);

    let response = server
        .post("/api/projects")
        .json(&json!({ "title": "Harbor" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["slug"], "harbor-1");
}

#[tokio::test]
async fn test_create_project_slug_scoped_per_kind() {
    let store = common::InMemoryStore::new();
    store.seed(ContentKind::BlogPost, "harbor");
    let server = server(store);

    let response = server
        .post("/api/projects")
        .json(&json!({ "title": "Harbor" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["slug"], "harbor");
}

#[tokio::test]
async fn test_create_project_short_and_reserved_titles() {
    let server = server(common::InMemoryStore::new());

    for (title, expected) in [("AI", "ai-1"), ("Admin", "admin-1")] {
        let response = server
            .post("/api/projects")
            .json(&json!({ "title": title }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<serde_json::Value>()["slug"], expected);
    }
}

#[tokio::test]
async fn test_create_project_invalid_custom_slug() {
    let server = server(common::InMemoryStore::new());

    let response = server
        .post("/api/projects")
        .json(&json!({ "title": "Harbor", "slug": "-Harbor--" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let codes: Vec<&str> = json["error"]["details"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"invalid_characters"));
    assert!(codes.contains(&"edge_hyphen"));
    assert!(codes.contains(&"consecutive_hyphens"));
}

#[tokio::test]
async fn test_create_project_taken_custom_slug() {
    let store = common::InMemoryStore::new();
    store.seed(ContentKind::Project, "harbor");
    let server = server(store);

    let response = server
        .post("/api/projects")
        .json(&json!({ "title": "Harbor", "slug": "harbor" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "conflict"
    );
}

#[tokio::test]
async fn test_create_project_empty_title() {
    let server = server(common::InMemoryStore::new());

    let response = server
        .post("/api/projects")
        .json(&json!({ "title": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_projects_is_cached_until_create() {
    let store = common::InMemoryStore::new();
    let server = server(store.clone());

    server
        .post("/api/projects")
        .json(&json!({ "title": "Harbor", "published": true }))
        .await
        .assert_status(StatusCode::CREATED);

    let first = server.get("/api/projects").await;
    first.assert_status_ok();
    let second = server.get("/api/projects").await;
    second.assert_status_ok();

    assert_eq!(store.list_calls(), 1);
    assert_eq!(second.json::<serde_json::Value>()["total"], 1);

    server
        .post("/api/projects")
        .json(&json!({ "title": "Lighthouse", "published": true }))
        .await
        .assert_status(StatusCode::CREATED);

    let third = server.get("/api/projects").await;
    let json = third.json::<serde_json::Value>();

    assert_eq!(store.list_calls(), 2);
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"][0]["slug"], "lighthouse");
}

#[tokio::test]
async fn test_list_projects_hides_unpublished() {
    let server = server(common::InMemoryStore::new());

    server
        .post("/api/projects")
        .json(&json!({ "title": "Draft Work" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/projects").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["total"], 0);
}

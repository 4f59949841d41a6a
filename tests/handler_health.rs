mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use cms_service::api::handlers::health_handler;
use cms_service::infrastructure::cache::CacheFacade;
use std::sync::Arc;

fn server(state: cms_service::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(common::InMemoryStore::new());
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_disabled_cache_is_not_degraded() {
    let state = common::create_test_state_with_cache(
        common::InMemoryStore::new(),
        Arc::new(CacheFacade::disabled()),
    );
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["cache"]["status"], "disabled");
}

#[tokio::test]
async fn test_health_database_down() {
    let store = common::InMemoryStore::new();
    store.set_offline(true);
    let server = server(common::create_test_state(store));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

use axum::{body::Body, http::Request};
use projectboard_server::{api::app_router, config::Config, store::DashboardStore, AppState};
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let config = Config::from_env().unwrap();
    let state = AppState::new(Arc::new(DashboardStore::new()));
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn unknown_api_route_is_json_404() {
    let config = Config::from_env().unwrap();
    let state = AppState::new(Arc::new(DashboardStore::new()));
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 404);
}

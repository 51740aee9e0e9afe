use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "dealership-ops");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_convert_endpoint_requires_post() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/lead/00000000-0000-0000-0000-000000000000/convert")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // GET sobre un endpoint solo-POST
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// Función helper para crear la app de test (sin base de datos)
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "dealership-ops",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/api/lead/:id/convert",
            post(|| async { Json(json!({ "success": true })) }),
        )
}

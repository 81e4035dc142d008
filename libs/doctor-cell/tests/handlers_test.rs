use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use doctor_cell::router::doctor_routes;
use doctor_cell::DoctorDirectory;

fn create_test_app() -> Router {
    doctor_routes(Arc::new(DoctorDirectory::seeded()))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn listing_returns_all_doctors() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["doctors"][1]["id"], "2");
    assert_eq!(body["doctors"][1]["name"], "د. سارة خالد");
    assert_eq!(body["doctors"][1]["specialty"], "جلدية");
}

#[tokio::test]
async fn fetching_a_doctor_includes_its_picker_label() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["doctor"]["name"], "د. سارة خالد");
    assert_eq!(body["label"], "د. سارة خالد - جلدية");
}

#[tokio::test]
async fn unknown_doctor_is_a_404() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("99"));
}

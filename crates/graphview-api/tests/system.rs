//! Module listing, health, and session cookies.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use graphview_core::types::SessionId;

use helpers::{TestApp, body_json};

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_modules_are_listed_sorted_with_raw() {
    let app = TestApp::new();

    let body = body_json(app.request(get("/api/modules")).await).await;
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["key"].as_str().unwrap())
        .collect();

    assert_eq!(keys, vec!["blank", "broken", "echo", "edgelist", "raw", "slow"]);
    assert_eq!(body[3]["name"], "Edge list");
}

#[tokio::test]
async fn test_health_reports_module_count() {
    let app = TestApp::new();

    let response = app.request(get("/api/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["modules"], 5);
}

#[tokio::test]
async fn test_new_session_gets_cookie() {
    let app = TestApp::new();

    let response = app.request(get("/api/health")).await;

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("GRAPHVIEW_SESSION="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_known_session_keeps_cookie() {
    let app = TestApp::new();

    let response = app
        .request(
            Request::get("/api/health")
                .header(header::COOKIE, app.cookie(SessionId::new()))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_invalid_session_cookie_is_replaced() {
    let app = TestApp::new();

    let response = app
        .request(
            Request::get("/api/health")
                .header(header::COOKIE, "GRAPHVIEW_SESSION=not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert!(response.headers().get(header::SET_COOKIE).is_some());
}

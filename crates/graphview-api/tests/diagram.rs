//! Diagram upload and session diagram retrieval.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use graphview_core::config::AppConfig;
use graphview_core::types::SessionId;
use graphview_entity::SessionDiagram;

use helpers::{TestApp, body_bytes, body_json};

async fn assert_bare_400(app: &TestApp, session: SessionId) {
    let response = app.get_diagram(session).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_no_stored_diagram_is_bare_400() {
    let app = TestApp::new();
    assert_bare_400(&app, SessionId::new()).await;
}

#[tokio::test]
async fn test_raw_diagram_is_returned_verbatim() {
    let app = TestApp::new();
    let session = SessionId::new();
    let graph = r#"{"vertices":[],"edges":[]}"#;
    app.store_diagram(
        session,
        SessionDiagram::new(graph, "raw", Some("graph.json".into())),
    )
    .await;

    let response = app.get_diagram(session).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"graph_json": graph, "name": "graph.json"})
    );
}

#[tokio::test]
async fn test_edgelist_is_converted() {
    let app = TestApp::new();
    let session = SessionId::new();
    app.store_diagram(session, SessionDiagram::new("A -> B", "edgelist", None))
        .await;

    let response = app.get_diagram(session).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], serde_json::Value::Null);
    let graph: serde_json::Value =
        serde_json::from_str(body["graph_json"].as_str().unwrap()).unwrap();
    assert_eq!(graph["vertices"].as_array().unwrap().len(), 2);
    assert_eq!(graph["edges"][0]["from"], 0);
    assert_eq!(graph["edges"][0]["to"], 1);
}

#[tokio::test]
async fn test_conversion_failures_are_bare_400() {
    let app = TestApp::new();

    for format_type in ["graphml", "broken", "blank"] {
        let session = SessionId::new();
        app.store_diagram(session, SessionDiagram::new("A -> B", format_type, None))
            .await;
        assert_bare_400(&app, session).await;
    }

    let untyped = SessionId::new();
    app.store_diagram(
        untyped,
        SessionDiagram {
            content: "A -> B".into(),
            format_type: None,
            filename: None,
        },
    )
    .await;
    assert_bare_400(&app, untyped).await;
}

#[tokio::test]
async fn test_broken_module_does_not_affect_later_requests() {
    let app = TestApp::new();
    let session = SessionId::new();

    app.store_diagram(session, SessionDiagram::new("x", "broken", None))
        .await;
    assert_bare_400(&app, session).await;

    app.store_diagram(session, SessionDiagram::new("x", "echo", None))
        .await;
    let response = app.get_diagram(session).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["graph_json"], "x");
}

#[tokio::test]
async fn test_slow_module_times_out() {
    let mut config = AppConfig::default();
    config.modules.invocation_timeout_seconds = 1;
    let app = TestApp::with_config(config);
    let session = SessionId::new();
    app.store_diagram(session, SessionDiagram::new("x", "slow", None))
        .await;

    assert_bare_400(&app, session).await;
}

#[tokio::test]
async fn test_upload_then_retrieve() {
    let app = TestApp::new();
    let session = SessionId::new();

    let response = app
        .upload(
            session,
            &[
                ("type", None, "edgelist"),
                ("file", Some("deps.txt"), "# deps\nApi -> Core : uses\n"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get_diagram(session).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "deps.txt");
    let graph: serde_json::Value =
        serde_json::from_str(body["graph_json"].as_str().unwrap()).unwrap();
    assert_eq!(graph["edges"][0]["label"], "uses");
}

#[tokio::test]
async fn test_upload_replaces_previous_diagram() {
    let app = TestApp::new();
    let session = SessionId::new();

    app.upload(session, &[("type", None, "edgelist"), ("file", Some("a.txt"), "A")])
        .await;
    app.upload(session, &[("type", None, "raw"), ("file", Some("b.json"), "{}")])
        .await;

    let body = body_json(app.get_diagram(session).await).await;
    assert_eq!(body, json!({"graph_json": "{}", "name": "b.json"}));
}

#[tokio::test]
async fn test_upload_reports_missing_parts() {
    let app = TestApp::new();

    let response = app
        .upload(SessionId::new(), &[("comment", None, "nothing useful")])
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].get("file").is_some());
    assert!(body["error"].get("type").is_some());
}

#[tokio::test]
async fn test_upload_rejects_unknown_type() {
    let app = TestApp::new();
    let session = SessionId::new();

    let response = app
        .upload(session, &[("type", None, "graphml"), ("file", Some("g.xml"), "<graph/>")])
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["type"], "Unknown diagram type.");
    assert!(app.state.sessions.get(session).await.is_none());
}

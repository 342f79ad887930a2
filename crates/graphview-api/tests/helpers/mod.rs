//! Shared test harness: the full application over an in-memory user store.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use graphview_api::{AppState, build_app};
use graphview_core::config::AppConfig;
use graphview_core::types::SessionId;
use graphview_database::MemoryUserRepository;
use graphview_entity::SessionDiagram;
use graphview_module::prelude::*;
use graphview_module::ModuleRegistry;

pub const BOUNDARY: &str = "graphview-test-boundary";

/// Returns its input unchanged.
#[derive(Default)]
pub struct Echo;

impl ConversionModule for Echo {
    fn convert(&mut self, input: &str) -> Result<String> {
        Ok(input.to_string())
    }
}

/// Always fails.
#[derive(Default)]
pub struct Broken;

impl ConversionModule for Broken {
    fn convert(&mut self, _input: &str) -> Result<String> {
        panic!("broken module")
    }
}

/// Produces only whitespace.
#[derive(Default)]
pub struct Blank;

impl ConversionModule for Blank {
    fn convert(&mut self, _input: &str) -> Result<String> {
        Ok("   ".to_string())
    }
}

/// Sleeps well past any test timeout.
#[derive(Default)]
pub struct Slow;

impl ConversionModule for Slow {
    fn convert(&mut self, input: &str) -> Result<String> {
        std::thread::sleep(Duration::from_secs(2));
        Ok(input.to_string())
    }
}

pub struct TestApp {
    pub state: AppState,
    pub users: Arc<MemoryUserRepository>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let mut builder = ModuleRegistry::builder();
        builder
            .register(module_edgelist::descriptor())
            .register(ModuleDescriptor::of::<Echo>("echo", "Echo"))
            .register(ModuleDescriptor::of::<Broken>("broken", "Broken"))
            .register(ModuleDescriptor::of::<Blank>("blank", "Blank"))
            .register(ModuleDescriptor::of::<Slow>("slow", "Slow"));

        let users = Arc::new(MemoryUserRepository::new());
        let state = AppState::new(config, builder.build(), users.clone());
        let router = build_app(state.clone());

        Self {
            state,
            users,
            router,
        }
    }

    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub fn cookie(&self, session: SessionId) -> String {
        format!("{}={}", self.state.config.session.cookie_name, session)
    }

    pub async fn store_diagram(&self, session: SessionId, diagram: SessionDiagram) {
        self.state.sessions.put(session, diagram).await;
    }

    pub async fn get_diagram(&self, session: SessionId) -> Response<Body> {
        self.request(
            Request::get("/api/session-diagram")
                .header(header::COOKIE, self.cookie(session))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn register(&self, session: SessionId, form: &str) -> Response<Body> {
        self.request(
            Request::post("/api/register")
                .header(header::COOKIE, self.cookie(session))
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Posts a multipart upload; each part is `(name, filename, value)`.
    pub async fn upload(
        &self,
        session: SessionId,
        parts: &[(&str, Option<&str>, &str)],
    ) -> Response<Body> {
        self.request(
            Request::post("/api/diagram/upload")
                .header(header::COOKIE, self.cookie(session))
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await
    }
}

pub fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
    let mut body = String::new();
    for (name, filename, value) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match filename {
            Some(filename) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: text/plain\r\n\r\n"
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
            )),
        }
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("JSON body")
}

//! Shared helpers for in-process router tests.

use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::from_fn_with_state;
use axum::Router;

use demogate_core::{issue_token, now_ms, DEFAULT_SESSION_TTL_MS};

use crate::config::ServerConfig;
use crate::state::AppState;

pub const TEST_SIGNING_KEY: &str = "0123456789abcdef0123456789abcdef";

pub fn config() -> ServerConfig {
    let mut config: ServerConfig = toml::from_str("").unwrap();
    config.auth.username = "demo".to_string();
    config.auth.password = "hunter2".to_string();
    config.auth.signing_key = TEST_SIGNING_KEY.to_string();
    config
}

/// Full application router: gated routes behind the access-gate middleware.
pub fn app() -> Router {
    app_with(|_| {})
}

pub fn app_with(adjust: impl FnOnce(&mut ServerConfig)) -> Router {
    let mut config = config();
    adjust(&mut config);
    let state = AppState::new(config);
    crate::api::gated_router()
        .layer(from_fn_with_state(
            state.clone(),
            crate::middleware::access_gate::access_gate,
        ))
        .with_state(state)
}

pub fn valid_token() -> String {
    issue_token(
        TEST_SIGNING_KEY.as_bytes(),
        "demo",
        DEFAULT_SESSION_TTL_MS,
        now_ms(),
    )
    .unwrap()
}

pub fn get(uri: &str, session_token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = session_token {
        builder = builder.header(header::COOKIE, format!("demo_auth_v2={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_login(json_body: &str, client_ip: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/demo/login")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", client_ip)
        .body(Body::from(json_body.to_string()))
        .unwrap()
}

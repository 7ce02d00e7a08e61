//! The access gate: request-level session enforcement for the protected
//! section.
//!
//! Applied as router middleware. The login path is always reachable so users
//! can authenticate; every other gated path requires a valid session cookie
//! and otherwise redirects to login with the original destination preserved
//! in a sanitized `next` parameter.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use demogate_core::{now_ms, sanitize_next, verify_token, SessionPayload};

use crate::cookie;
use crate::state::AppState;

pub async fn access_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let config = &state.config;
    let path = req.uri().path().to_string();
    let original = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    // An unconfigured gate never recognizes a session: fail closed.
    let session: Option<SessionPayload> = if config.is_configured() {
        cookie::session_cookie(req.headers())
            .and_then(|token| verify_token(config.auth.signing_key.as_bytes(), token, now_ms()).ok())
    } else {
        None
    };

    if path == config.gate.login_path {
        if let Some(session) = session {
            // Already authenticated: skip re-login and send the user on.
            let requested = query_param(req.uri().query(), "next").unwrap_or_default();
            let target = sanitize_next(
                &requested,
                &config.gate.allowed_next_prefixes,
                &config.gate.protected_prefix,
            );
            tracing::debug!("Existing session for {}, redirecting to {target}", session.sub);
            return Redirect::to(&target).into_response();
        }
        return next.run(req).await;
    }

    match session {
        Some(_) => next.run(req).await,
        None => {
            let location = format!(
                "{}?next={}",
                config.gate.login_path,
                urlencoding::encode(&original)
            );
            Redirect::to(&location).into_response()
        }
    }
}

/// Returns the decoded value of `name` from a raw query string.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name)
            .then(|| urlencoding::decode(value).ok())
            .flatten()
            .map(|v| v.into_owned())
    })
}

use axum::extract::State;
use axum::http::{header, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use demogate_core::{constant_time_eq, issue_token, now_ms, sanitize_next};

use crate::cookie::{self, SESSION_COOKIE_NAME};
use crate::dto::*;
use crate::error::AppError;
use crate::middleware::client_ip::ClientIp;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    if !state.config.is_configured() {
        return Err(AppError::NotConfigured);
    }

    let decision = state.limiter.check(&format!("login:{ip}"));
    if !decision.allowed {
        tracing::warn!("Rate-limited login attempt from {ip}");
        let retry_after_secs = decision
            .retry_after
            .map(|d| d.as_secs().max(1))
            .unwrap_or(1);
        return Err(AppError::RateLimited { retry_after_secs });
    }

    let auth = &state.config.auth;
    // Both comparisons always run, so the response cannot distinguish an
    // unknown user from a wrong password.
    let username_ok = constant_time_eq(body.username.as_bytes(), auth.username.as_bytes());
    let password_ok = constant_time_eq(body.password.as_bytes(), auth.password.as_bytes());
    if !(username_ok & password_ok) {
        tracing::warn!("Failed login attempt from {ip}");
        return Err(AppError::Auth);
    }

    let token = issue_token(
        auth.signing_key.as_bytes(),
        &auth.username,
        state.config.session_ttl_ms(),
        now_ms(),
    )?;
    tracing::info!("Login succeeded for {}", auth.username);

    let redirect_to = sanitize_next(
        body.next.as_deref().unwrap_or(""),
        &state.config.gate.allowed_next_prefixes,
        &state.config.gate.protected_prefix,
    );

    let set_cookie = cookie::format_set_cookie(
        SESSION_COOKIE_NAME,
        &token,
        &state.config.gate.protected_prefix,
        state.config.session_ttl().as_secs(),
        state.config.tls_enabled(),
    );
    let mut response = Json(LoginResponse {
        ok: true,
        redirect_to,
    })
    .into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&set_cookie)
            .map_err(|e| AppError::Internal(format!("invalid cookie value: {e}")))?,
    );
    Ok(response)
}

pub async fn logout(State(state): State<AppState>) -> Result<Response, AppError> {
    let clear = cookie::format_clear_cookie(
        SESSION_COOKIE_NAME,
        &state.config.gate.protected_prefix,
        state.config.tls_enabled(),
    );
    let mut response = Json(serde_json::json!({ "ok": true })).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&clear)
            .map_err(|e| AppError::Internal(format!("invalid cookie value: {e}")))?,
    );
    Ok(response)
}

/// Minimal login form; the production site overlays its own styling.
pub async fn login_page() -> Html<&'static str> {
    Html(concat!(
        "<!doctype html><title>Log in</title>",
        "<form method=\"post\">",
        "<input name=\"username\" autocomplete=\"username\">",
        "<input name=\"password\" type=\"password\" autocomplete=\"current-password\">",
        "<button>Log in</button>",
        "</form>",
    ))
}

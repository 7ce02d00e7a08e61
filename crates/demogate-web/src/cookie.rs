//! Session cookie naming, formatting, and extraction.

use axum::http::{header, HeaderMap};

pub const SESSION_COOKIE_NAME: &str = "demo_auth_v2";

/// Formats a `Set-Cookie` value carrying the session token, scoped to the
/// protected path prefix.
#[must_use]
pub fn format_set_cookie(name: &str, value: &str, path: &str, max_age: u64, secure: bool) -> String {
    let secure_flag = if secure { "; Secure" } else { "" };
    format!("{name}={value}; HttpOnly{secure_flag}; SameSite=Lax; Path={path}; Max-Age={max_age}")
}

/// Formats a `Set-Cookie` value that clears the session cookie.
#[must_use]
pub fn format_clear_cookie(name: &str, path: &str, secure: bool) -> String {
    format_set_cookie(name, "", path, 0, secure)
}

/// Extracts the session cookie's value from a request's `Cookie` header.
#[must_use]
pub fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == SESSION_COOKIE_NAME).then_some(value)
    })
}

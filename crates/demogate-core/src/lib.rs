//! Demogate core library — host-agnostic access-gate logic.
//!
//! `demogate-core` provides the building blocks for gating a private site
//! section behind a single credential pair: stateless HMAC-signed session
//! tokens, a fixed-window rate limiter, and redirect-target sanitization.
//! It is intentionally decoupled from any web framework so the HTTP host
//! (`demogate-web`) stays a thin shell over these primitives.
//!
//! # Modules
//!
//! - [`compare`] — Constant-time byte equality.
//! - [`codec`] — URL-safe reversible byte encoding for token parts.
//! - [`token`] — Session token issuance and verification ([`SessionPayload`]).
//! - [`ratelimit`] — Fixed-window per-key request limiting ([`RateLimiter`]).
//! - [`redirect`] — Post-login redirect-target sanitization.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod codec;
pub mod compare;
pub mod error;
pub mod ratelimit;
pub mod redirect;
pub mod token;

pub use compare::constant_time_eq;
pub use error::{CoreError, CoreResult};
pub use ratelimit::{RateDecision, RateLimiter};
pub use redirect::sanitize_next;
pub use token::{
    issue_token, now_ms, verify_token, InvalidToken, SessionPayload, DEFAULT_SESSION_TTL_MS,
};

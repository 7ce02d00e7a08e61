//! Session token issuance and verification.
//!
//! A token is the string `body.signature`: `body` is the URL-safe encoding of
//! the JSON-serialized [`SessionPayload`], `signature` the URL-safe encoding
//! of HMAC-SHA256 over the body under the signing key. Tokens are bearer
//! credentials and self-contained; the server keeps no per-session state, and
//! expiry is the only lifecycle bound. Rotating the signing key invalidates
//! every outstanding token immediately.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::codec;
use crate::compare::constant_time_eq;
use crate::error::{CoreError, CoreResult};

type HmacSha256 = Hmac<Sha256>;

/// Default session lifetime: 12 hours, in milliseconds.
pub const DEFAULT_SESSION_TTL_MS: u64 = 12 * 60 * 60 * 1000;

/// Claims embedded in a session token. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

/// Opaque verification failure.
///
/// Signature mismatch, malformed encoding, unparseable payload, and expiry
/// all collapse into this one value so a caller probing tokens cannot learn
/// which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid or expired token")]
pub struct InvalidToken;

/// Current wall-clock time as epoch milliseconds.
///
/// A clock before the epoch yields 0, which makes every token look expired —
/// the gate fails closed rather than open.
#[must_use]
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Issues a signed session token for `subject`, valid for `ttl_ms` from `now_ms`.
pub fn issue_token(
    signing_key: &[u8],
    subject: &str,
    ttl_ms: u64,
    now_ms: u64,
) -> CoreResult<String> {
    let payload = SessionPayload {
        sub: subject.to_string(),
        iat: now_ms,
        exp: now_ms.saturating_add(ttl_ms),
    };
    let json = serde_json::to_vec(&payload).map_err(|e| CoreError::Payload(e.to_string()))?;
    let body = codec::encode(json);
    let signature = codec::encode(sign(signing_key, body.as_bytes()));
    Ok(format!("{body}.{signature}"))
}

/// Verifies a token and returns its payload, or [`InvalidToken`].
///
/// The HMAC is recomputed over the raw body and checked in constant time
/// before the body is decoded or parsed; nothing inside the payload is
/// trusted, or even looked at, until the signature matches.
pub fn verify_token(
    signing_key: &[u8],
    token: &str,
    now_ms: u64,
) -> Result<SessionPayload, InvalidToken> {
    let (body, signature) = token.split_once('.').ok_or(InvalidToken)?;
    if body.is_empty() || signature.is_empty() {
        return Err(InvalidToken);
    }

    let provided = codec::decode(signature).map_err(|_| InvalidToken)?;
    let expected = sign(signing_key, body.as_bytes());
    if !constant_time_eq(&expected, &provided) {
        return Err(InvalidToken);
    }

    let raw = codec::decode(body).map_err(|_| InvalidToken)?;
    let payload: SessionPayload = serde_json::from_slice(&raw).map_err(|_| InvalidToken)?;
    if now_ms >= payload.exp {
        return Err(InvalidToken);
    }
    Ok(payload)
}

fn sign(key: &[u8], message: &[u8]) -> [u8; 32] {
    // HMAC-SHA256 accepts keys of any length, so construction cannot fail.
    let mut mac = HmacSha256::new_from_slice(key).expect("hmac accepts any key length");
    mac.update(message);
    let mut signature = [0_u8; 32];
    signature.copy_from_slice(&mac.finalize().into_bytes());
    signature
}

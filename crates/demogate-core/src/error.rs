//! Error types for `demogate-core`.
//!
//! Fallible operations in the core library return [`CoreResult<T>`], an alias
//! for `Result<T, CoreError>`. Token verification is the deliberate exception:
//! it returns the opaque [`crate::token::InvalidToken`] so callers cannot tell
//! a bad signature from an expired or malformed payload.

/// Unified error type for core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input to the token codec was not valid URL-safe base64.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// A session payload could not be serialized.
    #[error("payload serialization failed: {0}")]
    Payload(String),
}

/// Convenience alias used throughout `demogate-core`.
pub type CoreResult<T> = Result<T, CoreError>;

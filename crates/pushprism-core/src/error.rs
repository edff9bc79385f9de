//! Shared error type across pushPrism crates.

use thiserror::Error;

use crate::platform::Platform;

/// Stable error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Payload exceeds its byte ceiling and cannot be recovered.
    PayloadTooLarge,
    /// Message carries no content at all.
    EmptyMessage,
    /// Message selects no target platforms.
    NoPlatforms,
    /// Invalid configuration.
    Config,
    /// JSON encoding failed.
    Encode,
    /// Transport hand-off failed.
    Transport,
}

impl ErrorKind {
    /// String representation used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorKind::EmptyMessage => "EMPTY_MESSAGE",
            ErrorKind::NoPlatforms => "NO_PLATFORMS",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Encode => "ENCODE",
            ErrorKind::Transport => "TRANSPORT",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PushPrismError>;

/// Unified error type used by core and dispatch.
#[derive(Debug, Error)]
pub enum PushPrismError {
    /// Serialized payload for one platform is over its ceiling and body
    /// truncation cannot bring it back under.
    #[error("payload for {platform} is {size} bytes, over the {limit} byte limit")]
    PayloadTooLarge {
        platform: Platform,
        size: usize,
        limit: usize,
    },
    #[error("message has no content: set text or custom data")]
    EmptyMessage,
    #[error("message selects no platforms")]
    NoPlatforms,
    #[error("invalid config: {0}")]
    Config(String),
    #[error("json encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("transport publish failed: {0}")]
    Transport(String),
}

impl PushPrismError {
    /// Map internal error to a stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PushPrismError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            PushPrismError::EmptyMessage => ErrorKind::EmptyMessage,
            PushPrismError::NoPlatforms => ErrorKind::NoPlatforms,
            PushPrismError::Config(_) => ErrorKind::Config,
            PushPrismError::Encode(_) => ErrorKind::Encode,
            PushPrismError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Platform the failure is scoped to, when it is per-platform.
    /// Lets callers drop one oversized platform instead of the whole send.
    pub fn platform(&self) -> Option<Platform> {
        match self {
            PushPrismError::PayloadTooLarge { platform, .. } => Some(*platform),
            _ => None,
        }
    }
}

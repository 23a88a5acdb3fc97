//! Typed errors for the HelpNear core.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during the assisted-contact workflow.
#[derive(Debug, Error)]
pub enum OutreachError {
    /// Situation description was empty or whitespace-only.
    ///
    /// Caller-fixable precondition; the generative service is never
    /// invoked when this is returned.
    #[error("situation description is empty")]
    EmptySituation,

    /// Generation service unavailable or failed
    #[error("generation service error: {0}")]
    Generation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Generation response did not match the required artifact shape
    #[error("malformed generation response: {0}")]
    Schema(#[from] serde_json::Error),

    /// Request was superseded by a newer one
    #[error("generation cancelled")]
    Cancelled,
}

/// Errors that can occur when persisting interaction history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// History store operation failed
    #[error("history store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur when loading the provider directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Provider list fetch failed
    #[error("provider load failed: {0}")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by platform outreach channels (clipboard, dialer, ...).
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The platform capability is missing or refused the request
    #[error("channel unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for outreach operations.
pub type Result<T> = std::result::Result<T, OutreachError>;

/// Result type alias for history operations.
pub type HistoryResult<T> = std::result::Result<T, HistoryError>;

/// Result type alias for directory operations.
pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;

/// Result type alias for channel operations.
pub type ChannelResult<T> = std::result::Result<T, ChannelError>;

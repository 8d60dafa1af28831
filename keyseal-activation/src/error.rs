//! Error types for the activation module.

use thiserror::Error;

/// Activation-specific errors.
///
/// Transport faults are deliberately collapsed into a single network
/// class; the distinction between URL, connect, send, and receive
/// failures is logged but never surfaced to callers.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// Connection, send, or receive failure: any transport-level fault.
    #[error("network error: {0}")]
    Network(String),

    /// The server response body was not a valid protocol document.
    #[error("JSON parse error: {0}")]
    Parse(String),
}

/// Result type for activation operations.
pub type ActivationResult<T> = Result<T, ActivationError>;

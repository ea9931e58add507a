//! Error types for `has` operations.
//!
//! This module defines [`HasError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe errors (`ProbeSpawn`, `ProbeTimedOut`, `ProbeNonZeroExit`,
//!   `ProbeEmptyOutput`) are internal: the prober logs them and moves on to
//!   the next candidate
//! - `NotFound` is rendered per query as a failure line
//! - Use `anyhow::Error` (via `HasError::Other`) for unexpected errors

use std::time::Duration;
use thiserror::Error;

/// Core error type for `has` operations.
#[derive(Debug, Error)]
pub enum HasError {
    /// Name is neither a shell builtin nor on the search path.
    #[error("{name}: command not found")]
    NotFound { name: String },

    /// Probe process could not be started.
    #[error("Failed to spawn '{command}': {message}")]
    ProbeSpawn { command: String, message: String },

    /// Probe process did not exit in time and was killed.
    #[error("'{command}' timed out after {}ms", .timeout.as_millis())]
    ProbeTimedOut { command: String, timeout: Duration },

    /// Probe process exited unsuccessfully.
    #[error("'{command}' exited with code {code:?}")]
    ProbeNonZeroExit { command: String, code: Option<i32> },

    /// Probe process succeeded but printed nothing usable.
    #[error("'{command}' produced no output")]
    ProbeEmptyOutput { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for `has` operations.
pub type Result<T> = std::result::Result<T, HasError>;

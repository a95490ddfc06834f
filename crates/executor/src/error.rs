//! Executor error type.
//!
//! Form validation failures are not errors: they come back as
//! `Output::State(ReturnState::Error)` with the per-field flags stored in the
//! session. This type covers everything else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`Executor::execute`](crate::Executor::execute).
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// Index does not reference a sett in the session
    #[error("sett not found: index {index} (session holds {len})")]
    SettNotFound {
        /// Requested index
        index: usize,
        /// Number of setts in the session
        len: usize,
    },

    /// Write command issued against a read-only executor
    #[error("access denied: {reason}")]
    AccessDenied {
        /// What was refused
        reason: String,
    },

    /// Input rejected outside of form validation
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Session or form payload could not be encoded or decoded
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying decoder message
        reason: String,
    },

    /// Configuration could not be loaded or applied
    #[error("config error: {reason}")]
    Config {
        /// What went wrong
        reason: String,
    },

    /// Invariant violation inside the executor
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the broken invariant
        reason: String,
    },
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

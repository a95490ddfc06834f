//! Access control for sett survey sessions.
//!
//! This crate provides the [`AccessMode`] and [`OpenOptions`] types used to
//! control whether the handlers may change a session's sett list. A survey
//! that has already been submitted for licensing is opened read-only: the
//! surveyor can still list their setts but not add, edit or delete them.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// Controls whether sessions allow writes or are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Allow both reads and writes (default).
    #[default]
    ReadWrite,
    /// Read-only mode: every write command is rejected.
    ReadOnly,
}

impl AccessMode {
    /// True when write commands are permitted.
    pub fn allows_writes(&self) -> bool {
        matches!(self, AccessMode::ReadWrite)
    }
}

/// Options for opening an executor over sett sessions.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use sett_security::{AccessMode, OpenOptions};
///
/// let opts = OpenOptions::new().access_mode(AccessMode::ReadOnly);
/// assert!(!opts.access_mode.allows_writes());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOptions {
    /// The access mode for sessions handled by the executor.
    #[serde(default)]
    pub access_mode: AccessMode,
}

impl OpenOptions {
    /// Create a new `OpenOptions` with default settings (read-write mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            access_mode: AccessMode::ReadWrite,
        }
    }
}

//! Error types for the sett domain.
//!
//! Two layers:
//! - [`FieldError`]: a single form field failed a typed constructor
//! - [`SettError`]: a session-level operation could not be applied

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four fields of the sett details form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// `currentSettId`
    SettId,
    /// `currentGridReference`
    GridReference,
    /// `currentSettType`
    SettType,
    /// `currentEntrances`
    Entrances,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::SettId,
        Field::GridReference,
        Field::SettType,
        Field::Entrances,
    ];

    /// The form/session field name.
    pub fn form_name(&self) -> &'static str {
        match self {
            Field::SettId => "currentSettId",
            Field::GridReference => "currentGridReference",
            Field::SettType => "currentSettType",
            Field::Entrances => "currentEntrances",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

/// A form field value that could not be turned into its typed form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Field absent or blank after trimming
    #[error("{0} is missing")]
    Missing(Field),
    /// Field could not be parsed as a base-10 integer
    #[error("{field} is not a number: '{value}'")]
    NotANumber {
        /// Offending field
        field: Field,
        /// Raw submitted value
        value: String,
    },
    /// Sett type code outside 1..=4
    #[error("sett type {0} is out of range (expected 1-4)")]
    TypeOutOfRange(i64),
    /// Grid reference did not match the two-letters-plus-digits layout
    #[error("'{0}' is not a grid reference")]
    MalformedGridReference(String),
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::NotANumber { field, .. } => *field,
            FieldError::TypeOutOfRange(_) => Field::SettType,
            FieldError::MalformedGridReference(_) => Field::GridReference,
        }
    }
}

/// Errors from session-level sett operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettError {
    /// An edit target or explicit index does not reference a stored sett
    #[error("no sett at index {index} (session holds {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of setts in the session
        len: usize,
    },
    /// Session payload could not be encoded or decoded
    #[error("session serialization failed: {0}")]
    Serialization(String),
}

/// Result type for session-level sett operations.
pub type SettResult<T> = std::result::Result<T, SettError>;

impl From<serde_json::Error> for SettError {
    fn from(err: serde_json::Error) -> Self {
        SettError::Serialization(err.to_string())
    }
}

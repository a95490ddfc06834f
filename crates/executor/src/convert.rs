//! Error conversion from internal error types.
//!
//! This module provides conversions from core, serde and config errors to
//! the executor's [`Error`] type.

use crate::Error;
use sett_core::{FieldError, SettError, SettResult};

/// Convert a SettError to an executor Error.
impl From<SettError> for Error {
    fn from(err: SettError) -> Self {
        match err {
            SettError::IndexOutOfRange { index, len } => Error::SettNotFound { index, len },
            SettError::Serialization(reason) => Error::Serialization { reason },
        }
    }
}

impl From<FieldError> for Error {
    fn from(err: FieldError) -> Self {
        Error::InvalidInput {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config {
            reason: format!("invalid config: {}", err),
        }
    }
}

/// Convert a sett_core::SettResult to an executor Result.
pub fn convert_result<T>(result: SettResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}

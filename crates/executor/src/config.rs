//! Survey configuration.
//!
//! Loaded from a TOML file, typically `sett-survey.toml`:
//!
//! ```toml
//! access_mode = "read_only"
//! log_filter = "sett=debug"
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sett_security::{AccessMode, OpenOptions};

use crate::{Error, Result};

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Executor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurveyConfig {
    /// Whether sessions may be changed
    pub access_mode: AccessMode,
    /// `tracing-subscriber` env-filter directive
    pub log_filter: String,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            access_mode: AccessMode::ReadWrite,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SurveyConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// Options for [`Executor::with_options`](crate::Executor::with_options).
    pub fn open_options(&self) -> OpenOptions {
        OpenOptions::new().access_mode(self.access_mode)
    }
}

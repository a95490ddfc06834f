//! Tracing setup.
//!
//! Handlers log under the `sett::executor` target; callers that do not run
//! their own subscriber can install a plain fmt subscriber here.

use tracing_subscriber::EnvFilter;

use crate::config::SurveyConfig;
use crate::{Error, Result};

/// Install a global fmt subscriber filtered by `directive`
/// (e.g. `"info"` or `"sett::executor=debug"`).
///
/// Fails if the directive does not parse or a global subscriber is already
/// installed.
pub fn init(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive).map_err(|e| Error::Config {
        reason: format!("invalid log filter '{}': {}", directive, e),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Config {
            reason: format!("tracing already initialized: {}", e),
        })
}

/// Install a subscriber using the configured filter.
pub fn init_from_config(config: &SurveyConfig) -> Result<()> {
    init(&config.log_filter)
}

//! Typed API over the executor.
//!
//! ```
//! use sett_executor::{Survey, SettForm, SettSession, ReturnState};
//!
//! let survey = Survey::new();
//! let mut session = SettSession::new();
//!
//! let form = SettForm::new("S1", "NH 6400 4800", "1", "3");
//! assert_eq!(survey.submit(&mut session, form)?, ReturnState::Positive);
//! assert_eq!(survey.setts(&mut session)?.len(), 1);
//! # Ok::<(), sett_executor::Error>(())
//! ```

mod setts;

use crate::config::SurveyConfig;
use crate::Executor;

/// Handle for sett details operations.
///
/// Wraps an [`Executor`] and unpacks its [`Output`](crate::Output) into the
/// type each operation actually returns.
#[derive(Debug, Clone, Default)]
pub struct Survey {
    executor: Executor,
}

impl Survey {
    /// Read-write survey with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Survey configured from a [`SurveyConfig`].
    pub fn from_config(config: &SurveyConfig) -> Self {
        Self {
            executor: Executor::with_options(config.open_options()),
        }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

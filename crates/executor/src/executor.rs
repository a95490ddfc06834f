//! Command dispatch.

use sett_core::SettSession;
use sett_security::{AccessMode, OpenOptions};
use tracing::{debug, warn};

use crate::handlers;
use crate::{Command, Error, Output, Result};

/// Executes [`Command`]s against a caller-owned [`SettSession`].
///
/// The executor holds only its options, so one instance can serve every
/// request; each call gets the session of the request being handled.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    options: OpenOptions,
}

impl Executor {
    /// Read-write executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor with explicit options.
    pub fn with_options(options: OpenOptions) -> Self {
        Self { options }
    }

    /// The configured access mode.
    pub fn access_mode(&self) -> AccessMode {
        self.options.access_mode
    }

    /// Run `command` against `session`.
    pub fn execute(&self, session: &mut SettSession, command: Command) -> Result<Output> {
        debug!(target: "sett::executor", command = command.name(), "execute");

        if command.is_write() && !self.options.access_mode.allows_writes() {
            warn!(target: "sett::executor", command = command.name(), "write rejected: read-only");
            return Err(Error::AccessDenied {
                reason: format!("{} is not allowed in read-only mode", command.name()),
            });
        }

        match command {
            Command::SubmitSettDetails { form } => {
                handlers::sett::submit_sett_details(session, &form)
            }
            Command::ConfirmSetts => handlers::sett::confirm_setts(session),
            Command::NewSett => handlers::session::new_sett(session),
            Command::EditSett { index } => handlers::session::edit_sett(session, index),
            Command::DeleteSett { index } => handlers::session::delete_sett(session, index),
            Command::ListSetts => handlers::session::list_setts(session),
        }
    }

    /// Decode a JSON session, run `command`, and re-encode the session.
    ///
    /// The returned JSON reflects every change the command made, including
    /// error flags set by a rejected submission.
    pub fn execute_json(&self, session_json: &str, command: Command) -> Result<(String, Output)> {
        let mut session = SettSession::from_json(session_json)?;
        let output = self.execute(&mut session, command)?;
        Ok((session.to_json()?, output))
    }
}

//! Commands accepted by the executor.
//!
//! Each variant maps onto one form action of the sett details flow. Commands
//! are plain data so a web layer can decode them straight from a request.

use serde::{Deserialize, Serialize};
use sett_core::SettForm;

/// A single operation against a sett session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Validate the sett details form and append or update a record.
    SubmitSettDetails {
        /// The submitted form
        form: SettForm,
    },
    /// Start entering a new sett.
    NewSett,
    /// Start editing the sett at `index`.
    EditSett {
        /// Index into the session's sett list
        index: usize,
    },
    /// Remove the sett at `index`.
    DeleteSett {
        /// Index into the session's sett list
        index: usize,
    },
    /// Return every recorded sett.
    ListSetts,
    /// Finish the sett list; fails when no setts were recorded.
    ConfirmSetts,
}

impl Command {
    /// True for commands that change the sett list or the edit target.
    pub fn is_write(&self) -> bool {
        !matches!(self, Command::ListSetts)
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SubmitSettDetails { .. } => "SubmitSettDetails",
            Command::NewSett => "NewSett",
            Command::EditSett { .. } => "EditSett",
            Command::DeleteSett { .. } => "DeleteSett",
            Command::ListSetts => "ListSetts",
            Command::ConfirmSetts => "ConfirmSetts",
        }
    }
}

//! Sett operations: submit, navigate, delete, list, confirm.

use super::Survey;
use crate::{Command, Error, Output, Result};
use sett_core::{ReturnState, Sett, SettForm, SettSession};

impl Survey {
    // =========================================================================
    // Form submission (2)
    // =========================================================================

    /// Submit the sett details form.
    pub fn submit(&self, session: &mut SettSession, form: SettForm) -> Result<ReturnState> {
        match self
            .executor
            .execute(session, Command::SubmitSettDetails { form })?
        {
            Output::State(state) => Ok(state),
            _ => Err(Error::Internal {
                reason: "Unexpected output for SubmitSettDetails".into(),
            }),
        }
    }

    /// Finish the sett list.
    pub fn confirm(&self, session: &mut SettSession) -> Result<ReturnState> {
        match self.executor.execute(session, Command::ConfirmSetts)? {
            Output::State(state) => Ok(state),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ConfirmSetts".into(),
            }),
        }
    }

    // =========================================================================
    // Navigation (2)
    // =========================================================================

    /// Start entering a new sett.
    pub fn new_sett(&self, session: &mut SettSession) -> Result<()> {
        match self.executor.execute(session, Command::NewSett)? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for NewSett".into(),
            }),
        }
    }

    /// Start editing the sett at `index`.
    pub fn edit(&self, session: &mut SettSession, index: usize) -> Result<()> {
        match self.executor.execute(session, Command::EditSett { index })? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for EditSett".into(),
            }),
        }
    }

    // =========================================================================
    // List management (2)
    // =========================================================================

    /// Remove and return the sett at `index`.
    pub fn delete(&self, session: &mut SettSession, index: usize) -> Result<Sett> {
        match self.executor.execute(session, Command::DeleteSett { index })? {
            Output::Sett(sett) => Ok(sett),
            _ => Err(Error::Internal {
                reason: "Unexpected output for DeleteSett".into(),
            }),
        }
    }

    /// All recorded setts.
    pub fn setts(&self, session: &mut SettSession) -> Result<Vec<Sett>> {
        match self.executor.execute(session, Command::ListSetts)? {
            Output::Setts(setts) => Ok(setts),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListSetts".into(),
            }),
        }
    }
}

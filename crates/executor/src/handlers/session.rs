//! Session navigation handlers.
//!
//! Moves the edit target around the sett list and removes records.

use sett_core::{SettSession, Target};
use tracing::info;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle NewSett command: target a new record with an empty form.
pub fn new_sett(session: &mut SettSession) -> Result<Output> {
    session.target = Target::New;
    session.clear_form();
    Ok(Output::Unit)
}

/// Handle EditSett command: target an existing record and load it into
/// the form.
pub fn edit_sett(session: &mut SettSession, index: usize) -> Result<Output> {
    let sett = convert_result(session.sett(index))?.clone();
    session.target = Target::Existing(index);
    session.clear_form();
    session.echo_sett(&sett);
    Ok(Output::Unit)
}

/// Handle DeleteSett command.
pub fn delete_sett(session: &mut SettSession, index: usize) -> Result<Output> {
    let removed = convert_result(session.remove(index))?;
    info!(
        target: "sett::executor",
        index,
        id = %removed.id,
        remaining = session.setts.len(),
        "sett deleted"
    );
    Ok(Output::Sett(removed))
}

/// Handle ListSetts command.
pub fn list_setts(session: &SettSession) -> Result<Output> {
    Ok(Output::Setts(session.setts.clone()))
}

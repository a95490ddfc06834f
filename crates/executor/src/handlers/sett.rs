//! Sett details command handlers.
//!
//! - SubmitSettDetails: validate the form, then append or update a record
//! - ConfirmSetts: check the surveyor recorded at least one sett

use sett_core::{ReturnState, SettForm, SettSession, Upsert};
use tracing::{debug, info};

use crate::convert::convert_result;
use crate::{Error, Output, Result};

/// Handle SubmitSettDetails command.
///
/// Every field is validated and its failure flag stored in the session,
/// along with the aggregate `settDetailsError`. On any failure the submitted
/// values are echoed back for redisplay, the sett list is left alone, and
/// the result is `ReturnState::Error`.
///
/// On success the record is built from the parsed fields and written to the
/// session's target: appended for `Target::New` (which also clears
/// `settCountError`), or overwritten in place for `Target::Existing`.
///
/// Invalid input never produces `Err`. The only error is a stale
/// `Existing` target, reported as `Error::SettNotFound`.
pub fn submit_sett_details(session: &mut SettSession, form: &SettForm) -> Result<Output> {
    let errors = form.validate();
    session.record_field_errors(errors);

    if errors.any() {
        session.echo_form(form);
        debug!(
            target: "sett::executor",
            failed = ?errors.failed(),
            "sett details rejected"
        );
        return Ok(Output::State(ReturnState::Error));
    }

    let sett = form.to_sett().map_err(|errors| Error::Internal {
        reason: format!("validated form failed to build: {:?}", errors.failed()),
    })?;

    match convert_result(session.upsert(sett))? {
        Upsert::Appended(index) => {
            info!(target: "sett::executor", index, total = session.setts.len(), "sett added");
        }
        Upsert::Updated(index) => {
            info!(target: "sett::executor", index, "sett updated");
        }
    }

    Ok(Output::State(ReturnState::Positive))
}

/// Handle ConfirmSetts command.
///
/// Sets `settCountError` when the list is empty.
pub fn confirm_setts(session: &mut SettSession) -> Result<Output> {
    session.sett_count_error = session.setts.is_empty();
    if session.sett_count_error {
        debug!(target: "sett::executor", "no setts recorded");
    }
    Ok(Output::State(ReturnState::from_ok(
        !session.sett_count_error,
    )))
}

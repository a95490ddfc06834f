//! Results returned by the executor.

use serde::Serialize;
use sett_core::{ReturnState, Sett};

/// Successful result of a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "output", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Nothing to report
    Unit,
    /// Which view the router should show next
    State(ReturnState),
    /// A single record (e.g. the one just deleted)
    Sett(Sett),
    /// Every record in the session
    Setts(Vec<Sett>),
}

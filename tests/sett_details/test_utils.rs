//! Shared helpers for the sett details suite.

use sett_survey::prelude::*;

/// A form that passes every validator.
pub fn valid_form(id: &str) -> SettForm {
    SettForm::new(id, "NH 6400 4800", "1", "3")
}

/// Session pre-populated with one valid sett per id.
pub fn session_with(survey: &Survey, ids: &[&str]) -> SettSession {
    let mut session = SettSession::new();
    for id in ids {
        let state = survey.submit(&mut session, valid_form(id)).unwrap();
        assert_eq!(state, ReturnState::Positive);
    }
    session
}

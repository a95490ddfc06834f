//! Tier 2: the submission handler.

use crate::test_utils::{session_with, valid_form};
use sett_survey::prelude::*;

#[test]
fn new_target_appends_exactly_one() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a", "b"]);
    assert_eq!(session.target, Target::New);

    let form = SettForm::new("  c ", "sk 1234 5678", "4", "-2");
    assert_eq!(survey.submit(&mut session, form).unwrap(), ReturnState::Positive);

    assert_eq!(session.setts.len(), 3);
    let added = &session.setts[2];
    assert_eq!(added.id, "c");
    assert_eq!(added.sett_type, SettType::Outlier);
    assert_eq!(added.grid_reference.as_str(), "SK12345678");
    assert_eq!(added.entrances, -2);
}

#[test]
fn existing_target_updates_in_place() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a", "b", "c"]);
    session.target = Target::Existing(1);

    let form = SettForm::new("b2", "TQ 3000 8000", "2", "11");
    assert_eq!(survey.submit(&mut session, form).unwrap(), ReturnState::Positive);

    let ids: Vec<_> = session.setts.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b2", "c"]);
    assert_eq!(session.setts[1].grid_reference.as_str(), "TQ30008000");
    assert_eq!(session.setts[1].entrances, 11);
}

#[test]
fn invalid_submission_leaves_list_untouched() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a"]);
    let before = session.setts.clone();

    let form = SettForm::new("", "NH6404801", "0", "");
    assert_eq!(survey.submit(&mut session, form).unwrap(), ReturnState::Error);

    assert_eq!(session.setts, before);
    assert!(session.sett_details_error);
    assert_eq!(
        session.field_errors().failed(),
        vec![
            Field::SettId,
            Field::GridReference,
            Field::SettType,
            Field::Entrances
        ]
    );
}

#[test]
fn invalid_submission_against_existing_target_leaves_record() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a"]);
    session.target = Target::Existing(0);

    let form = SettForm::new("a", "NH64004800", "9", "1");
    assert_eq!(survey.submit(&mut session, form).unwrap(), ReturnState::Error);
    assert_eq!(session.setts[0].sett_type, SettType::Main);
    assert!(session.current_sett_type_error);
    assert!(!session.current_grid_reference_error);
}

#[test]
fn rejected_grid_reference_is_echoed_unformatted() {
    let survey = Survey::new();
    let mut session = SettSession::new();

    let form = SettForm::new("a", "  nh-640-480  ", "1", "1");
    survey.submit(&mut session, form).unwrap();

    assert_eq!(session.current_grid_reference.as_deref(), Some("nh-640-480"));
}

#[test]
fn single_bad_field_flags_only_that_field() {
    let survey = Survey::new();
    let mut session = SettSession::new();

    let mut form = valid_form("a");
    form.current_entrances = Some("several".into());
    assert_eq!(survey.submit(&mut session, form).unwrap(), ReturnState::Error);

    assert_eq!(session.field_errors().failed(), vec![Field::Entrances]);
    assert_eq!(session.current_entrances.as_deref(), Some("several"));
    assert!(session.setts.is_empty());
}

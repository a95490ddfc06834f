//! Tier 3: multi-step flows through the sett list.

use crate::test_utils::{session_with, valid_form};
use sett_survey::prelude::*;

#[test]
fn edit_then_submit_updates_the_edited_record() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a", "b"]);

    survey.edit(&mut session, 0).unwrap();
    assert_eq!(session.current_sett_id.as_deref(), Some("a"));
    assert_eq!(session.current_grid_reference.as_deref(), Some("NH64004800"));

    let form = SettForm::new("a", "NH64004800", "3", "7");
    survey.submit(&mut session, form).unwrap();

    assert_eq!(session.setts.len(), 2);
    assert_eq!(session.setts[0].sett_type, SettType::Subsidiary);
    assert_eq!(session.setts[0].entrances, 7);
}

#[test]
fn new_sett_after_edit_appends() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a"]);

    survey.edit(&mut session, 0).unwrap();
    survey.new_sett(&mut session).unwrap();
    assert_eq!(session.current_sett_id, None);

    survey.submit(&mut session, valid_form("b")).unwrap();
    assert_eq!(session.setts.len(), 2);
}

#[test]
fn deleting_the_edited_sett_falls_back_to_new() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a", "b", "c"]);

    survey.edit(&mut session, 1).unwrap();
    let removed = survey.delete(&mut session, 1).unwrap();
    assert_eq!(removed.id, "b");
    assert_eq!(session.target, Target::New);

    survey.submit(&mut session, valid_form("d")).unwrap();
    let ids: Vec<_> = survey
        .setts(&mut session)
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
}

#[test]
fn deleting_before_the_edited_sett_keeps_target() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a", "b", "c"]);

    survey.edit(&mut session, 2).unwrap();
    survey.delete(&mut session, 0).unwrap();
    assert_eq!(session.target, Target::Existing(1));

    survey
        .submit(&mut session, SettForm::new("c2", "NH64004800", "1", "1"))
        .unwrap();
    assert_eq!(session.setts[1].id, "c2");
}

#[test]
fn stale_edit_index_is_reported() {
    let survey = Survey::new();
    let mut session = session_with(&survey, &["a"]);
    session.target = Target::Existing(5);

    let err = survey.submit(&mut session, valid_form("x")).unwrap_err();
    assert_eq!(err, sett_survey::Error::SettNotFound { index: 5, len: 1 });
    assert_eq!(session.setts.len(), 1);
}

#[test]
fn confirm_requires_a_sett() {
    let survey = Survey::new();
    let mut session = SettSession::new();

    assert_eq!(survey.confirm(&mut session).unwrap(), ReturnState::Error);
    assert!(session.sett_count_error);

    survey.submit(&mut session, valid_form("a")).unwrap();
    assert!(!session.sett_count_error);
    assert_eq!(survey.confirm(&mut session).unwrap(), ReturnState::Positive);
}

#[test]
fn read_only_survey_lists_but_never_writes() {
    let writer = Survey::new();
    let mut session = session_with(&writer, &["a"]);

    let config = SurveyConfig::from_toml_str(r#"access_mode = "read_only""#).unwrap();
    let reader = Survey::from_config(&config);

    assert_eq!(reader.setts(&mut session).unwrap().len(), 1);
    assert!(matches!(
        reader.submit(&mut session, valid_form("b")),
        Err(sett_survey::Error::AccessDenied { .. })
    ));
    assert!(reader.delete(&mut session, 0).is_err());
    assert_eq!(session.setts.len(), 1);
}

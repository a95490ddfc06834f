//! Tier 4: the session as the web layer stores it.

use sett_survey::prelude::*;

#[test]
fn session_json_round_trip_through_executor() {
    let executor = Executor::new();
    let stored = r#"{
        "currentSettIndex": -1,
        "setts": [
            {"id": "a", "type": 1, "gridReference": "NH64004800", "entrances": 2}
        ]
    }"#;

    let command = Command::SubmitSettDetails {
        form: SettForm::new("b", "sk 1234 5678", "2", "1"),
    };
    let (json, output) = executor.execute_json(stored, command).unwrap();
    assert_eq!(output, Output::State(ReturnState::Positive));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["setts"][1]["gridReference"], "SK12345678");
    assert_eq!(value["setts"][1]["type"], 2);
    assert_eq!(value["settDetailsError"], false);
    assert_eq!(value["currentSettIndex"], -1);
}

#[test]
fn rejected_submission_is_persisted_with_flags() {
    let executor = Executor::new();
    let command = Command::SubmitSettDetails {
        form: SettForm::new("  a ", "NH6404801", "2", "1"),
    };
    let (json, output) = executor.execute_json("{}", command).unwrap();
    assert_eq!(output, Output::State(ReturnState::Error));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["currentGridReferenceError"], true);
    assert_eq!(value["settDetailsError"], true);
    assert_eq!(value["currentSettId"], "a");
    assert_eq!(value["currentSettType"], 2);
    assert_eq!(value["setts"], serde_json::json!([]));
}

#[test]
fn existing_index_decodes_to_target() {
    let session = SettSession::from_json(r#"{"currentSettIndex": 2}"#).unwrap();
    assert_eq!(session.target, Target::Existing(2));
}

#[test]
fn stored_record_with_bad_grid_reference_is_rejected() {
    let stored = r#"{"setts":[{"id":"a","type":1,"gridReference":"NH1","entrances":0}]}"#;
    let err = Executor::new()
        .execute_json(stored, Command::ListSetts)
        .unwrap_err();
    assert!(matches!(err, sett_survey::Error::Serialization { .. }));
}

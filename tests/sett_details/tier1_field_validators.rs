//! Tier 1: field validator behaviour.

use sett_survey::{
    format_grid_reference, valid_entrances, valid_grid_reference, valid_sett_id, valid_sett_type,
};

#[test]
fn grid_reference_is_tidied() {
    assert_eq!(format_grid_reference("-NH_6400 4800__"), "NH64004800");
}

#[test]
fn grid_reference_validation() {
    assert!(valid_grid_reference(Some("-NH_6400 4800__")));
    assert!(!valid_grid_reference(Some("NH6404801")), "odd digit count");
    assert!(!valid_grid_reference(Some("AB1234")), "too few digits");
    assert!(!valid_grid_reference(None));
}

#[test]
fn grid_reference_needs_eight_digits() {
    // Six digits is even but below the eight digit minimum.
    assert!(!valid_grid_reference(Some("NH640480")));
    assert!(valid_grid_reference(Some("NH64048000")));
}

#[test]
fn sett_type_range() {
    assert!(!valid_sett_type(Some("0")));
    assert!(!valid_sett_type(Some("5")));
    assert!(valid_sett_type(Some("3")));
    assert!(valid_sett_type(Some("2 (annexe)")));
}

#[test]
fn entrances() {
    assert!(!valid_entrances(Some("")));
    assert!(!valid_entrances(Some("abc")));
    assert!(valid_entrances(Some("0")));
    assert!(valid_entrances(Some(" 6 ")));
}

#[test]
fn sett_id() {
    assert!(valid_sett_id(Some("A")));
    assert!(!valid_sett_id(Some(" \t")));
    assert!(!valid_sett_id(None));
}

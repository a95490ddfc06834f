//! Core types for sett survey records
//!
//! This crate defines the domain model shared by every other crate:
//! - Sett: one badger sett record (id, grid reference, type, entrances)
//! - GridReference / SettType: typed, validated field values
//! - SettForm / FieldErrors: the submitted form and its per-field failures
//! - SettSession: the per-user state the form handlers read and write
//! - FieldError / SettError: error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod grid;
pub mod parse;
pub mod session;
pub mod sett;
pub mod validate;

pub use error::{Field, FieldError, SettError, SettResult};
pub use grid::{format_grid_reference, GridReference};
pub use session::{ReturnState, SettSession, Target, Upsert};
pub use sett::{Sett, SettType};
pub use validate::{
    valid_entrances, valid_grid_reference, valid_sett_id, valid_sett_type, FieldErrors, SettForm,
};

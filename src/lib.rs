//! Sett survey: validation and session storage for badger sett records.
//!
//! A surveyor fills in one form per sett: an id, a grid reference, the sett
//! type (1-4) and the number of entrances. Each submission is validated
//! field by field; valid records are appended to, or updated in, the
//! surveyor's session.
//!
//! ```
//! use sett_survey::prelude::*;
//!
//! let survey = Survey::new();
//! let mut session = SettSession::new();
//!
//! let bad = SettForm::new("S1", "NH 6404801", "1", "3");
//! assert_eq!(survey.submit(&mut session, bad)?, ReturnState::Error);
//! assert!(session.current_grid_reference_error);
//!
//! let good = SettForm::new("S1", "NH 6400 4800", "1", "3");
//! assert_eq!(survey.submit(&mut session, good)?, ReturnState::Positive);
//! assert_eq!(session.setts[0].grid_reference.as_str(), "NH64004800");
//! # Ok::<(), sett_survey::Error>(())
//! ```

pub mod types;

pub use sett_core::validate::{
    valid_entrances, valid_grid_reference, valid_sett_id, valid_sett_type,
};
pub use sett_core::{format_grid_reference, FieldError, SettError};
pub use sett_executor::{logging, Error, Result};

/// Everything a web layer typically needs.
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Error, Result};
}

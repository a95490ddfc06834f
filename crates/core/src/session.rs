//! Per-user session state for the sett details flow
//!
//! The web layer owns persistence of the session (cookie store, redis, ...);
//! this module only defines its shape and the mutations the handlers apply.
//! The JSON field names are the ones the form views read, so a session
//! serialized here can be handed straight to the view layer.
//!
//! # Edit target
//!
//! Which record a submission writes to is a [`Target`]. On the wire it stays
//! a single `currentSettIndex` number where `-1` means "new record".

use crate::error::{SettError, SettResult};
use crate::sett::Sett;
use crate::validate::{FieldErrors, SettForm};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a form handler, consumed by the router to choose the next view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnState {
    /// Redisplay the form with its error messages
    Error,
    /// Move on to the next page
    Positive,
}

impl ReturnState {
    /// `Positive` when `ok`, otherwise `Error`.
    pub fn from_ok(ok: bool) -> Self {
        if ok {
            ReturnState::Positive
        } else {
            ReturnState::Error
        }
    }

    /// True for `Positive`.
    pub fn is_positive(&self) -> bool {
        matches!(self, ReturnState::Positive)
    }
}

/// Which sett a submission writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Target {
    /// Append a new record
    #[default]
    New,
    /// Overwrite the record at this index
    Existing(usize),
}

impl Target {
    /// Wire value used for a new record.
    pub const NEW_INDEX: i64 = -1;
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::New => f.write_str("new"),
            Target::Existing(index) => write!(f, "#{}", index),
        }
    }
}

impl TryFrom<i64> for Target {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            Target::NEW_INDEX => Ok(Target::New),
            index => usize::try_from(index)
                .map(Target::Existing)
                .map_err(|_| format!("invalid currentSettIndex {}", index)),
        }
    }
}

impl From<Target> for i64 {
    fn from(value: Target) -> Self {
        match value {
            Target::New => Target::NEW_INDEX,
            Target::Existing(index) => i64::try_from(index).unwrap_or(i64::MAX),
        }
    }
}

/// What a successful upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// Record appended at this index
    Appended(usize),
    /// Record at this index overwritten
    Updated(usize),
}

impl Upsert {
    /// Index the record now lives at.
    pub fn index(&self) -> usize {
        match self {
            Upsert::Appended(index) | Upsert::Updated(index) => *index,
        }
    }
}

/// Session state for one surveyor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettSession {
    /// Echoed id (trimmed)
    pub current_sett_id: Option<String>,
    /// Echoed grid reference (trimmed, not normalized)
    pub current_grid_reference: Option<String>,
    /// Echoed type code (parsed)
    pub current_sett_type: Option<i64>,
    /// Echoed entrances (raw)
    pub current_entrances: Option<String>,

    /// Sett id failed validation
    pub current_sett_id_error: bool,
    /// Grid reference failed validation
    pub current_grid_reference_error: bool,
    /// Sett type failed validation
    pub current_sett_type_error: bool,
    /// Entrances failed validation
    pub current_entrances_error: bool,
    /// Any of the four fields failed
    pub sett_details_error: bool,
    /// The surveyor tried to continue without any setts
    pub sett_count_error: bool,

    /// Record the next submission writes to
    #[serde(rename = "currentSettIndex")]
    pub target: Target,
    /// Setts recorded so far, in entry order
    pub setts: Vec<Sett>,
}

impl SettSession {
    /// Empty session targeting a new record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a session from its JSON form.
    pub fn from_json(json: &str) -> SettResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this session as JSON.
    pub fn to_json(&self) -> SettResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Current per-field error flags.
    pub fn field_errors(&self) -> FieldErrors {
        FieldErrors {
            sett_id: self.current_sett_id_error,
            grid_reference: self.current_grid_reference_error,
            sett_type: self.current_sett_type_error,
            entrances: self.current_entrances_error,
        }
    }

    /// Store per-field flags and the aggregate flag.
    pub fn record_field_errors(&mut self, errors: FieldErrors) {
        self.current_sett_id_error = errors.sett_id;
        self.current_grid_reference_error = errors.grid_reference;
        self.current_sett_type_error = errors.sett_type;
        self.current_entrances_error = errors.entrances;
        self.sett_details_error = errors.any();
    }

    /// Copy the submitted values back for redisplay.
    pub fn echo_form(&mut self, form: &SettForm) {
        self.current_sett_id = form.echo_sett_id();
        self.current_grid_reference = form.echo_grid_reference();
        self.current_sett_type = form.echo_sett_type();
        self.current_entrances = form.echo_entrances();
    }

    /// Populate the form fields from a stored record.
    pub fn echo_sett(&mut self, sett: &Sett) {
        self.current_sett_id = Some(sett.id.clone());
        self.current_grid_reference = Some(sett.grid_reference.to_string());
        self.current_sett_type = Some(sett.sett_type.code());
        self.current_entrances = Some(sett.entrances.to_string());
    }

    /// Clear echoed values and all field error flags.
    pub fn clear_form(&mut self) {
        self.current_sett_id = None;
        self.current_grid_reference = None;
        self.current_sett_type = None;
        self.current_entrances = None;
        self.record_field_errors(FieldErrors::none());
    }

    /// Record at `index`.
    pub fn sett(&self, index: usize) -> SettResult<&Sett> {
        self.setts.get(index).ok_or(SettError::IndexOutOfRange {
            index,
            len: self.setts.len(),
        })
    }

    /// Write `sett` to the current target.
    ///
    /// Appending also clears the sett count error, since the list is no
    /// longer empty. An `Existing` target that no longer references a record
    /// leaves the list untouched.
    pub fn upsert(&mut self, sett: Sett) -> SettResult<Upsert> {
        match self.target {
            Target::New => {
                self.setts.push(sett);
                self.sett_count_error = false;
                Ok(Upsert::Appended(self.setts.len() - 1))
            }
            Target::Existing(index) => {
                let len = self.setts.len();
                let slot = self
                    .setts
                    .get_mut(index)
                    .ok_or(SettError::IndexOutOfRange { index, len })?;
                *slot = sett;
                Ok(Upsert::Updated(index))
            }
        }
    }

    /// Remove the record at `index`.
    ///
    /// An edit target on the removed record falls back to `New`; a target
    /// after it shifts down so it keeps pointing at the same record.
    pub fn remove(&mut self, index: usize) -> SettResult<Sett> {
        if index >= self.setts.len() {
            return Err(SettError::IndexOutOfRange {
                index,
                len: self.setts.len(),
            });
        }
        let removed = self.setts.remove(index);
        self.target = match self.target {
            Target::Existing(current) if current == index => Target::New,
            Target::Existing(current) if current > index => Target::Existing(current - 1),
            other => other,
        };
        Ok(removed)
    }
}

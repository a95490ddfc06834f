//! Sett details form validation
//!
//! Each form field has a boolean validator (what the form view needs to pick
//! its error messages) backed by a typed parser (what the handler needs to
//! build a [`Sett`]). Both always agree: a validator returns `true` exactly
//! when its parser returns `Ok`.
//!
//! Missing and malformed input are not distinguished by the validators;
//! both simply fail.

use crate::error::{Field, FieldError};
use crate::grid::{format_grid_reference, is_formatted_grid_reference, GridReference};
use crate::parse::{parse_leading_int, parse_optional_int};
use crate::sett::{Sett, SettType};
use serde::{Deserialize, Serialize};

// =============================================================================
// Field parsers
// =============================================================================

/// Trimmed sett id, or `Missing` when absent or blank.
pub fn parse_sett_id(input: Option<&str>) -> Result<&str, FieldError> {
    match input.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(FieldError::Missing(Field::SettId)),
    }
}

/// Normalized grid reference.
pub fn parse_grid_reference(input: Option<&str>) -> Result<GridReference, FieldError> {
    let input = input.ok_or(FieldError::Missing(Field::GridReference))?;
    GridReference::parse(input)
}

/// Sett type from its 1-4 code.
pub fn parse_sett_type(input: Option<&str>) -> Result<SettType, FieldError> {
    let input = input.ok_or(FieldError::Missing(Field::SettType))?;
    SettType::parse(input)
}

/// Entrance count. Any integer is accepted, including negatives.
pub fn parse_entrances(input: Option<&str>) -> Result<i64, FieldError> {
    let input = match input {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err(FieldError::Missing(Field::Entrances)),
    };
    parse_leading_int(input).ok_or_else(|| FieldError::NotANumber {
        field: Field::Entrances,
        value: input.to_string(),
    })
}

// =============================================================================
// Boolean validators
// =============================================================================

/// False when the id is absent or blank after trimming.
pub fn valid_sett_id(input: Option<&str>) -> bool {
    parse_sett_id(input).is_ok()
}

/// False when absent; otherwise the formatted value must be an even-length
/// run of two letters and at least eight digits.
pub fn valid_grid_reference(input: Option<&str>) -> bool {
    match input {
        Some(raw) => is_formatted_grid_reference(&format_grid_reference(raw)),
        None => false,
    }
}

/// True for integer codes 1 through 4.
pub fn valid_sett_type(input: Option<&str>) -> bool {
    parse_sett_type(input).is_ok()
}

/// False when absent, blank, or not an integer.
pub fn valid_entrances(input: Option<&str>) -> bool {
    parse_entrances(input).is_ok()
}

// =============================================================================
// Form + validation result
// =============================================================================

/// The sett details form as submitted.
///
/// Every field is optional because a browser (or a crafted request) may omit
/// any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettForm {
    /// `currentSettId`
    #[serde(default)]
    pub current_sett_id: Option<String>,
    /// `currentGridReference`
    #[serde(default)]
    pub current_grid_reference: Option<String>,
    /// `currentSettType`
    #[serde(default)]
    pub current_sett_type: Option<String>,
    /// `currentEntrances`
    #[serde(default)]
    pub current_entrances: Option<String>,
}

impl SettForm {
    /// Create a form with all four fields present.
    pub fn new(
        sett_id: impl Into<String>,
        grid_reference: impl Into<String>,
        sett_type: impl Into<String>,
        entrances: impl Into<String>,
    ) -> Self {
        Self {
            current_sett_id: Some(sett_id.into()),
            current_grid_reference: Some(grid_reference.into()),
            current_sett_type: Some(sett_type.into()),
            current_entrances: Some(entrances.into()),
        }
    }

    /// Run all four validators.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            sett_id: !valid_sett_id(self.current_sett_id.as_deref()),
            grid_reference: !valid_grid_reference(self.current_grid_reference.as_deref()),
            sett_type: !valid_sett_type(self.current_sett_type.as_deref()),
            entrances: !valid_entrances(self.current_entrances.as_deref()),
        }
    }

    /// Build the record this form describes.
    ///
    /// Returns the full set of failing fields if any field is invalid.
    pub fn to_sett(&self) -> Result<Sett, FieldErrors> {
        let errors = self.validate();
        if errors.any() {
            return Err(errors);
        }
        self.build().map_err(|e| FieldErrors::only(e.field()))
    }

    fn build(&self) -> Result<Sett, FieldError> {
        let id = parse_sett_id(self.current_sett_id.as_deref())?;
        let grid_reference = parse_grid_reference(self.current_grid_reference.as_deref())?;
        let sett_type = parse_sett_type(self.current_sett_type.as_deref())?;
        let entrances = parse_entrances(self.current_entrances.as_deref())?;
        Ok(Sett::new(id, sett_type, grid_reference, entrances))
    }

    /// Trimmed id for redisplay.
    pub fn echo_sett_id(&self) -> Option<String> {
        self.current_sett_id.as_deref().map(|s| s.trim().to_string())
    }

    /// Trimmed but not normalized grid reference for redisplay, so the
    /// surveyor sees what they typed.
    pub fn echo_grid_reference(&self) -> Option<String> {
        self.current_grid_reference
            .as_deref()
            .map(|s| s.trim().to_string())
    }

    /// Parsed type code for redisplay, `None` when not a number.
    pub fn echo_sett_type(&self) -> Option<i64> {
        parse_optional_int(self.current_sett_type.as_deref())
    }

    /// Entrances exactly as submitted.
    pub fn echo_entrances(&self) -> Option<String> {
        self.current_entrances.clone()
    }
}

/// Per-field failure flags from validating a [`SettForm`].
///
/// `true` means the field failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    /// Sett id failed
    pub sett_id: bool,
    /// Grid reference failed
    pub grid_reference: bool,
    /// Sett type failed
    pub sett_type: bool,
    /// Entrances failed
    pub entrances: bool,
}

impl FieldErrors {
    /// No failures.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single failing field.
    pub fn only(field: Field) -> Self {
        let mut errors = Self::default();
        errors.set(field, true);
        errors
    }

    /// Aggregate flag: true when any field failed.
    pub fn any(&self) -> bool {
        self.sett_id || self.grid_reference || self.sett_type || self.entrances
    }

    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        !self.any()
    }

    /// Whether `field` failed.
    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::SettId => self.sett_id,
            Field::GridReference => self.grid_reference,
            Field::SettType => self.sett_type,
            Field::Entrances => self.entrances,
        }
    }

    /// Set the flag for `field`.
    pub fn set(&mut self, field: Field, failed: bool) {
        match field {
            Field::SettId => self.sett_id = failed,
            Field::GridReference => self.grid_reference = failed,
            Field::SettType => self.sett_type = failed,
            Field::Entrances => self.entrances = failed,
        }
    }

    /// Failing fields in form order.
    pub fn failed(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }
}

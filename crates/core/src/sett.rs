//! Sett records
//!
//! A [`Sett`] is one badger burrow logged on a survey: an id chosen by the
//! surveyor, where it is, what kind of sett it is, and how many entrances it
//! has.

use crate::error::{Field, FieldError};
use crate::grid::GridReference;
use crate::parse::parse_leading_int;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sett classification, stored as its form code 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum SettType {
    /// Main sett (code 1)
    Main,
    /// Annexe sett (code 2)
    Annexe,
    /// Subsidiary sett (code 3)
    Subsidiary,
    /// Outlier sett (code 4)
    Outlier,
}

impl SettType {
    /// Look up a type by its form code.
    pub fn from_code(code: i64) -> Result<Self, FieldError> {
        match code {
            1 => Ok(SettType::Main),
            2 => Ok(SettType::Annexe),
            3 => Ok(SettType::Subsidiary),
            4 => Ok(SettType::Outlier),
            other => Err(FieldError::TypeOutOfRange(other)),
        }
    }

    /// Parse a submitted type field.
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        let code = parse_leading_int(input).ok_or_else(|| FieldError::NotANumber {
            field: Field::SettType,
            value: input.to_string(),
        })?;
        SettType::from_code(code)
    }

    /// The form code.
    pub fn code(&self) -> i64 {
        match self {
            SettType::Main => 1,
            SettType::Annexe => 2,
            SettType::Subsidiary => 3,
            SettType::Outlier => 4,
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SettType::Main => "main",
            SettType::Annexe => "annexe",
            SettType::Subsidiary => "subsidiary",
            SettType::Outlier => "outlier",
        }
    }
}

impl fmt::Display for SettType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for SettType {
    type Error = FieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        SettType::from_code(value)
    }
}

impl From<SettType> for i64 {
    fn from(value: SettType) -> Self {
        value.code()
    }
}

/// A single sett record as held in the session list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sett {
    /// Surveyor supplied id, trimmed and non-empty
    pub id: String,
    /// Classification
    #[serde(rename = "type")]
    pub sett_type: SettType,
    /// Normalized grid reference
    pub grid_reference: GridReference,
    /// Entrance count as submitted; not range checked
    pub entrances: i64,
}

impl Sett {
    /// Build a record from already typed parts.
    pub fn new(
        id: impl Into<String>,
        sett_type: SettType,
        grid_reference: GridReference,
        entrances: i64,
    ) -> Self {
        Self {
            id: id.into(),
            sett_type,
            grid_reference,
            entrances,
        }
    }
}

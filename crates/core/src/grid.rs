//! Grid references
//!
//! A grid reference locates a sett on the national grid: two letters for the
//! 100km square followed by an even number of digits (easting then northing).
//! The form accepts user input of dubious quality such as `-NH_6400 4800__`,
//! so input is normalized before it is checked.

use crate::error::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two letters then at least eight digits, anchored at both ends.
static GRID_REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9]{8,}$").expect("grid reference pattern compiles"));

/// Tidy a user supplied grid reference.
///
/// Uppercases the input and drops every character outside `[A-Z0-9]`.
///
/// ```
/// use sett_core::grid::format_grid_reference;
///
/// assert_eq!(format_grid_reference("-NH_6400 4800__"), "NH64004800");
/// ```
pub fn format_grid_reference(input: &str) -> String {
    input
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Check an already formatted grid reference.
///
/// The pattern only enforces "eight or more digits", so the even length
/// check is done separately.
pub(crate) fn is_formatted_grid_reference(formatted: &str) -> bool {
    if formatted.len() % 2 != 0 {
        return false;
    }
    GRID_REFERENCE_PATTERN.is_match(formatted)
}

/// A normalized, validated grid reference such as `NH64004800`.
///
/// The only way to build one is [`GridReference::parse`], so a value of this
/// type always satisfies the grid reference rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GridReference(String);

impl GridReference {
    /// Normalize and validate user input.
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        let formatted = format_grid_reference(input);
        if is_formatted_grid_reference(&formatted) {
            Ok(GridReference(formatted))
        } else {
            Err(FieldError::MalformedGridReference(input.to_string()))
        }
    }

    /// The 100km square letters.
    pub fn square(&self) -> &str {
        &self.0[..2]
    }

    /// Easting digits (first half of the numeric part).
    pub fn easting(&self) -> &str {
        let digits = &self.0[2..];
        &digits[..digits.len() / 2]
    }

    /// Northing digits (second half of the numeric part).
    pub fn northing(&self) -> &str {
        let digits = &self.0[2..];
        &digits[digits.len() / 2..]
    }

    /// Normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GridReference {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridReference::parse(s)
    }
}

impl TryFrom<String> for GridReference {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GridReference::parse(&value)
    }
}

impl From<GridReference> for String {
    fn from(value: GridReference) -> Self {
        value.0
    }
}

impl AsRef<str> for GridReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

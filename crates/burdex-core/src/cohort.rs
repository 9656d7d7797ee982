//! # Cohort Restriction — Birth-Year Window
//!
//! A cohort restriction limits which (year, age) combinations a contract
//! expects data for, based on when the affected population was born. The
//! birth year of a grid cell is derived by the caller as `year - age`.
//!
//! ## Invariant
//!
//! When both bounds are present, `minimum_birth_year <= maximum_birth_year`.
//! An absent bound is unbounded in that direction; the default restriction
//! has no bounds and admits every birth year.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A birth-year window restricting the expectation grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCohortRestriction")]
pub struct CohortRestriction {
    minimum_birth_year: Option<i32>,
    maximum_birth_year: Option<i32>,
}

/// Unvalidated mirror used for deserialization.
#[derive(Deserialize)]
struct RawCohortRestriction {
    #[serde(default)]
    minimum_birth_year: Option<i32>,
    #[serde(default)]
    maximum_birth_year: Option<i32>,
}

impl CohortRestriction {
    /// Build a restriction, rejecting an inverted window.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvertedCohortWindow`] if both bounds
    /// are present and the minimum exceeds the maximum.
    pub fn new(
        minimum_birth_year: Option<i32>,
        maximum_birth_year: Option<i32>,
    ) -> Result<Self, ConfigurationError> {
        if let (Some(min), Some(max)) = (minimum_birth_year, maximum_birth_year) {
            if min > max {
                return Err(ConfigurationError::InvertedCohortWindow {
                    minimum: min,
                    maximum: max,
                });
            }
        }
        Ok(Self {
            minimum_birth_year,
            maximum_birth_year,
        })
    }

    /// A restriction with no bounds: every birth year is admitted.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Earliest admitted birth year, if bounded below.
    pub fn minimum_birth_year(&self) -> Option<i32> {
        self.minimum_birth_year
    }

    /// Latest admitted birth year, if bounded above.
    pub fn maximum_birth_year(&self) -> Option<i32> {
        self.maximum_birth_year
    }

    /// Whether a birth year falls inside the window.
    ///
    /// True iff the birth year is at or above the minimum (when set) and at
    /// or below the maximum (when set). Pure and total.
    pub fn contains(&self, birth_year: i32) -> bool {
        self.minimum_birth_year.map_or(true, |min| birth_year >= min)
            && self.maximum_birth_year.map_or(true, |max| birth_year <= max)
    }
}

impl TryFrom<RawCohortRestriction> for CohortRestriction {
    type Error = ConfigurationError;

    fn try_from(raw: RawCohortRestriction) -> Result<Self, Self::Error> {
        Self::new(raw.minimum_birth_year, raw.maximum_birth_year)
    }
}

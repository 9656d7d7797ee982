//! # Reporting Contract — Expectations
//!
//! The `Expectations` contract describes what a disease-burden submission
//! must contain: a span of years, a span of ages, an optional birth-cohort
//! restriction, an ordered set of countries, and an ordered set of named
//! outcomes. The expectation grid and coverage machinery in `burdex-grid`
//! are derived from this contract and nothing else.
//!
//! ## Invariants
//!
//! - Country ids are unique within a contract.
//! - Outcome names are unique within a contract.
//! - Spans and the cohort window carry their own validity (see
//!   [`crate::span`] and [`crate::cohort`]).
//!
//! A contract is immutable once built. Declared order of countries and
//! outcomes is preserved; it drives enumeration order and template column
//! sets downstream.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cohort::CohortRestriction;
use crate::error::ConfigurationError;
use crate::identity::Country;
use crate::span::{AgeSpan, YearSpan};

/// A complete reporting contract, identified by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExpectations")]
pub struct Expectations {
    id: i32,
    description: String,
    years: YearSpan,
    ages: AgeSpan,
    cohorts: CohortRestriction,
    countries: Vec<Country>,
    outcomes: Vec<String>,
}

/// Unvalidated mirror used for deserialization.
#[derive(Deserialize)]
struct RawExpectations {
    id: i32,
    description: String,
    years: YearSpan,
    ages: AgeSpan,
    #[serde(default)]
    cohorts: CohortRestriction,
    countries: Vec<Country>,
    outcomes: Vec<String>,
}

impl Expectations {
    /// Build a contract, rejecting duplicate country ids and duplicate
    /// outcome names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateCountry`] or
    /// [`ConfigurationError::DuplicateOutcome`] on the first duplicate
    /// encountered. Span and cohort invariants are enforced by their own
    /// constructors before this point.
    pub fn new(
        id: i32,
        description: impl Into<String>,
        years: YearSpan,
        ages: AgeSpan,
        cohorts: CohortRestriction,
        countries: Vec<Country>,
        outcomes: Vec<String>,
    ) -> Result<Self, ConfigurationError> {
        check_unique_countries(&countries)?;
        check_unique_outcomes(&outcomes)?;
        Ok(Self {
            id,
            description: description.into(),
            years,
            ages,
            cohorts,
            countries,
            outcomes,
        })
    }

    /// Contract identity.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Span of calendar years covered.
    pub fn years(&self) -> YearSpan {
        self.years
    }

    /// Span of ages covered.
    pub fn ages(&self) -> AgeSpan {
        self.ages
    }

    /// The birth-cohort restriction.
    pub fn cohorts(&self) -> CohortRestriction {
        self.cohorts
    }

    /// Countries in contract-declared order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Outcome names in contract-declared order.
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }
}

impl TryFrom<RawExpectations> for Expectations {
    type Error = ConfigurationError;

    fn try_from(raw: RawExpectations) -> Result<Self, Self::Error> {
        Self::new(
            raw.id,
            raw.description,
            raw.years,
            raw.ages,
            raw.cohorts,
            raw.countries,
            raw.outcomes,
        )
    }
}

/// The country-free variant of the contract, as carried by responsibility
/// records before countries are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOutcomeExpectations")]
pub struct OutcomeExpectations {
    id: i32,
    description: String,
    years: YearSpan,
    ages: AgeSpan,
    cohorts: CohortRestriction,
    outcomes: Vec<String>,
}

/// Unvalidated mirror used for deserialization.
#[derive(Deserialize)]
struct RawOutcomeExpectations {
    id: i32,
    description: String,
    years: YearSpan,
    ages: AgeSpan,
    #[serde(default)]
    cohorts: CohortRestriction,
    outcomes: Vec<String>,
}

impl OutcomeExpectations {
    /// Build a country-free contract, rejecting duplicate outcome names.
    pub fn new(
        id: i32,
        description: impl Into<String>,
        years: YearSpan,
        ages: AgeSpan,
        cohorts: CohortRestriction,
        outcomes: Vec<String>,
    ) -> Result<Self, ConfigurationError> {
        check_unique_outcomes(&outcomes)?;
        Ok(Self {
            id,
            description: description.into(),
            years,
            ages,
            cohorts,
            outcomes,
        })
    }

    /// Contract identity.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Span of calendar years covered.
    pub fn years(&self) -> YearSpan {
        self.years
    }

    /// Span of ages covered.
    pub fn ages(&self) -> AgeSpan {
        self.ages
    }

    /// The birth-cohort restriction.
    pub fn cohorts(&self) -> CohortRestriction {
        self.cohorts
    }

    /// Outcome names in contract-declared order.
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    /// Attach a country list, producing a full contract.
    pub fn with_countries(
        self,
        countries: Vec<Country>,
    ) -> Result<Expectations, ConfigurationError> {
        Expectations::new(
            self.id,
            self.description,
            self.years,
            self.ages,
            self.cohorts,
            countries,
            self.outcomes,
        )
    }
}

impl TryFrom<RawOutcomeExpectations> for OutcomeExpectations {
    type Error = ConfigurationError;

    fn try_from(raw: RawOutcomeExpectations) -> Result<Self, Self::Error> {
        Self::new(
            raw.id,
            raw.description,
            raw.years,
            raw.ages,
            raw.cohorts,
            raw.outcomes,
        )
    }
}

fn check_unique_countries(countries: &[Country]) -> Result<(), ConfigurationError> {
    let mut seen = BTreeSet::new();
    for country in countries {
        if !seen.insert(&country.id) {
            return Err(ConfigurationError::DuplicateCountry(
                country.id.to_string(),
            ));
        }
    }
    Ok(())
}

fn check_unique_outcomes(outcomes: &[String]) -> Result<(), ConfigurationError> {
    let mut seen = BTreeSet::new();
    for outcome in outcomes {
        if !seen.insert(outcome.as_str()) {
            return Err(ConfigurationError::DuplicateOutcome(outcome.clone()));
        }
    }
    Ok(())
}

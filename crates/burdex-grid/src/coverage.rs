//! # Coverage Lookup — Which Expected Cells Have Been Supplied
//!
//! A three-level presence structure, country → age → year → status, built
//! from the same enumeration that defines the expectation grid. A key is
//! present in the structure iff the contract expects that cell; a key that
//! was never expected is absent entirely, which is a different statement
//! from "expected but not yet seen".
//!
//! ## Determinism
//!
//! The "first missing" queries return the numerically smallest key among
//! the missing entries, never an insertion- or hash-order artifact. The
//! levels are `BTreeMap`s, so the minimum is the first missing entry in
//! iteration order by construction.
//!
//! ## Ownership
//!
//! One lookup per validation run, owned and mutated exclusively by that
//! run. The contract it was built from is shared and never mutated.

use std::collections::BTreeMap;

use burdex_core::{CountryId, Expectations};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enumerate::expected_rows;

/// Presence state of one expected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Expected, not yet seen in the submission.
    Missing,
    /// Seen in the submission.
    Present,
}

impl RowStatus {
    /// Whether the cell is still missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Errors raised while tracking coverage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverageError {
    /// A submitted row targets a cell outside the expected grid.
    ///
    /// Non-fatal: the caller reports it and continues with subsequent rows.
    #[error("unexpected row: country {country}, age {age}, year {year} is not in the expected grid")]
    UnexpectedRow {
        /// Country code of the offending row.
        country: CountryId,
        /// Age of the offending row.
        age: i32,
        /// Year of the offending row.
        year: i32,
    },

    /// A "first missing" query was made on a scope with nothing missing.
    ///
    /// A contract violation on the caller's side: guard with `has_missing`
    /// before querying.
    #[error("no missing rows in scope {scope}")]
    NoMissingRows {
        /// The scope that was queried ("years" or "ages").
        scope: &'static str,
    },
}

/// Year → status for one (country, age) slice of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCoverage {
    years: BTreeMap<i32, RowStatus>,
}

impl YearCoverage {
    /// Whether any year in this slice is still missing.
    pub fn has_missing(&self) -> bool {
        self.years.values().any(RowStatus::is_missing)
    }

    /// The numerically smallest missing year in this slice.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::NoMissingRows`] if nothing is missing.
    pub fn first_missing_year(&self) -> Result<i32, CoverageError> {
        self.years
            .iter()
            .find(|(_, status)| status.is_missing())
            .map(|(year, _)| *year)
            .ok_or(CoverageError::NoMissingRows { scope: "years" })
    }

    /// Status of one year, if that year was expected at all.
    pub fn status(&self, year: i32) -> Option<RowStatus> {
        self.years.get(&year).copied()
    }

    /// Number of expected years in this slice.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Whether the slice expects no years at all (fully cohort-excluded).
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Age → year coverage for one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeCoverage {
    ages: BTreeMap<i32, YearCoverage>,
}

impl AgeCoverage {
    /// Whether any cell beneath this country is still missing.
    pub fn has_missing(&self) -> bool {
        self.ages.values().any(YearCoverage::has_missing)
    }

    /// The numerically smallest age that still has missing years.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::NoMissingRows`] if nothing is missing.
    pub fn first_age_with_missing_rows(&self) -> Result<i32, CoverageError> {
        self.ages
            .iter()
            .find(|(_, years)| years.has_missing())
            .map(|(age, _)| *age)
            .ok_or(CoverageError::NoMissingRows { scope: "ages" })
    }

    /// The year slice for one age, if that age is in the grid.
    pub fn age(&self, age: i32) -> Option<&YearCoverage> {
        self.ages.get(&age)
    }

    /// Iterate over (age, year slice) pairs in ascending age order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &YearCoverage)> {
        self.ages.iter().map(|(age, years)| (*age, years))
    }
}

/// The grid-wide coverage structure: country → age → year → status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageLookup {
    countries: BTreeMap<CountryId, AgeCoverage>,
}

impl CoverageLookup {
    /// Build the lookup for a contract: exactly the enumerated key set,
    /// every status `Missing`.
    ///
    /// Building from a constructed `Expectations` cannot fail; contract
    /// inconsistencies are rejected at contract construction.
    pub fn build(expectations: &Expectations) -> Self {
        let mut countries: BTreeMap<CountryId, AgeCoverage> = BTreeMap::new();
        for key in expected_rows(expectations) {
            countries
                .entry(key.country.id.clone())
                .or_default()
                .ages
                .entry(key.age)
                .or_default()
                .years
                .insert(key.year, RowStatus::Missing);
        }
        Self { countries }
    }

    /// Mark one cell as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::UnexpectedRow`] if the cell is not in the
    /// expected grid. The lookup is left untouched in that case; callers
    /// accumulate the error and continue with subsequent rows.
    pub fn mark_present(
        &mut self,
        country: &CountryId,
        age: i32,
        year: i32,
    ) -> Result<(), CoverageError> {
        let status = self
            .countries
            .get_mut(country)
            .and_then(|ages| ages.ages.get_mut(&age))
            .and_then(|years| years.years.get_mut(&year))
            .ok_or_else(|| CoverageError::UnexpectedRow {
                country: country.clone(),
                age,
                year,
            })?;
        *status = RowStatus::Present;
        Ok(())
    }

    /// Whether any cell anywhere in the grid is still missing.
    pub fn has_missing(&self) -> bool {
        self.countries.values().any(AgeCoverage::has_missing)
    }

    /// Whether any cell for one country is still missing.
    ///
    /// A country outside the grid has nothing expected, hence nothing
    /// missing.
    pub fn has_missing_for_country(&self, country: &CountryId) -> bool {
        self.countries
            .get(country)
            .map_or(false, AgeCoverage::has_missing)
    }

    /// Whether any year for one (country, age) slice is still missing.
    pub fn has_missing_for_age(&self, country: &CountryId, age: i32) -> bool {
        self.countries
            .get(country)
            .and_then(|ages| ages.age(age))
            .map_or(false, YearCoverage::has_missing)
    }

    /// The age-level coverage for one country, if the country is in the
    /// grid.
    pub fn country(&self, country: &CountryId) -> Option<&AgeCoverage> {
        self.countries.get(country)
    }

    /// Iterate over (country, age coverage) pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&CountryId, &AgeCoverage)> {
        self.countries.iter()
    }

    /// Total number of expected cells in the grid.
    pub fn total_cells(&self) -> usize {
        self.countries
            .values()
            .flat_map(|ages| ages.ages.values())
            .map(YearCoverage::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burdex_core::{AgeSpan, CohortRestriction, Country, YearSpan};

    fn country_id(code: &str) -> CountryId {
        CountryId::new(code).unwrap()
    }

    fn contract(cohorts: CohortRestriction) -> Expectations {
        Expectations::new(
            1,
            "test",
            YearSpan::new(2000, 2002).unwrap(),
            AgeSpan::new(0, 1).unwrap(),
            cohorts,
            vec![Country::new("AFG", "Afghanistan").unwrap()],
            vec!["deaths".to_string()],
        )
        .unwrap()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_build_inserts_exactly_the_enumerated_keys() {
        let c = contract(CohortRestriction::unrestricted());
        let lookup = CoverageLookup::build(&c);
        assert_eq!(lookup.total_cells(), 6);
        assert_eq!(lookup.total_cells(), expected_rows(&c).count());
    }

    #[test]
    fn test_fresh_lookup_is_all_missing() {
        let c = contract(CohortRestriction::unrestricted());
        let lookup = CoverageLookup::build(&c);
        for (_, ages) in lookup.iter() {
            for (_, years) in ages.iter() {
                assert!(years.has_missing());
            }
        }
        assert!(lookup.has_missing());
    }

    #[test]
    fn test_cohort_excluded_cell_is_absent_not_false() {
        // Minimum birth year 2000: age 1 in year 2000 (birth year 1999)
        // must have no entry at all.
        let c = contract(CohortRestriction::new(Some(2000), None).unwrap());
        let lookup = CoverageLookup::build(&c);
        let afg = lookup.country(&country_id("AFG")).unwrap();
        let age1 = afg.age(1).unwrap();
        assert_eq!(age1.status(2000), None);
        assert_eq!(age1.status(2001), Some(RowStatus::Missing));
    }

    // ── mark_present ─────────────────────────────────────────────────

    #[test]
    fn test_mark_present_flips_the_flag() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        let afg = country_id("AFG");
        lookup.mark_present(&afg, 0, 2000).unwrap();
        let status = lookup.country(&afg).unwrap().age(0).unwrap().status(2000);
        assert_eq!(status, Some(RowStatus::Present));
    }

    #[test]
    fn test_marking_every_key_clears_all_scopes() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        let keys: Vec<_> = expected_rows(&c)
            .map(|k| (k.country.id.clone(), k.age, k.year))
            .collect();
        for (country, age, year) in &keys {
            lookup.mark_present(country, *age, *year).unwrap();
        }
        assert!(!lookup.has_missing());
        let afg = country_id("AFG");
        assert!(!lookup.has_missing_for_country(&afg));
        assert!(!lookup.has_missing_for_age(&afg, 0));
        assert!(!lookup.has_missing_for_age(&afg, 1));
    }

    #[test]
    fn test_unexpected_row_is_rejected_and_leaves_flags_unchanged() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        let before = lookup.clone();

        let afg = country_id("AFG");
        // Year outside the contract span.
        let err = lookup.mark_present(&afg, 0, 1990).unwrap_err();
        assert_eq!(
            err,
            CoverageError::UnexpectedRow {
                country: afg.clone(),
                age: 0,
                year: 1990,
            }
        );
        // Unknown country.
        assert!(lookup.mark_present(&country_id("ZWE"), 0, 2000).is_err());
        // Age outside the contract span.
        assert!(lookup.mark_present(&afg, 5, 2000).is_err());

        assert_eq!(lookup, before);
    }

    #[test]
    fn test_unexpected_row_on_cohort_excluded_cell() {
        let c = contract(CohortRestriction::new(Some(2000), None).unwrap());
        let mut lookup = CoverageLookup::build(&c);
        // (age 1, year 2000) was never expected, so marking it is an error.
        let err = lookup.mark_present(&country_id("AFG"), 1, 2000).unwrap_err();
        assert!(matches!(err, CoverageError::UnexpectedRow { .. }));
    }

    // ── Completeness queries ─────────────────────────────────────────

    #[test]
    fn test_first_missing_year_is_numeric_minimum() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        let afg = country_id("AFG");
        lookup.mark_present(&afg, 0, 2000).unwrap();
        let age0 = lookup.country(&afg).unwrap().age(0).unwrap();
        assert_eq!(age0.first_missing_year().unwrap(), 2001);
    }

    #[test]
    fn test_first_missing_year_skips_present_gaps() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        let afg = country_id("AFG");
        lookup.mark_present(&afg, 0, 2001).unwrap();
        // 2000 still missing and is the minimum.
        let age0 = lookup.country(&afg).unwrap().age(0).unwrap();
        assert_eq!(age0.first_missing_year().unwrap(), 2000);
    }

    #[test]
    fn test_first_missing_year_errors_when_complete() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        let afg = country_id("AFG");
        for year in [2000, 2001, 2002] {
            lookup.mark_present(&afg, 0, year).unwrap();
        }
        let age0 = lookup.country(&afg).unwrap().age(0).unwrap();
        assert_eq!(
            age0.first_missing_year(),
            Err(CoverageError::NoMissingRows { scope: "years" })
        );
    }

    #[test]
    fn test_first_age_with_missing_rows_is_numeric_minimum() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        let afg = country_id("AFG");
        // Complete age 0 entirely; age 1 untouched.
        for year in [2000, 2001, 2002] {
            lookup.mark_present(&afg, 0, year).unwrap();
        }
        let ages = lookup.country(&afg).unwrap();
        assert_eq!(ages.first_age_with_missing_rows().unwrap(), 1);
    }

    #[test]
    fn test_first_age_errors_when_complete() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        for key in expected_rows(&c) {
            lookup
                .mark_present(&key.country.id, key.age, key.year)
                .unwrap();
        }
        let ages = lookup.country(&country_id("AFG")).unwrap();
        assert_eq!(
            ages.first_age_with_missing_rows(),
            Err(CoverageError::NoMissingRows { scope: "ages" })
        );
    }

    #[test]
    fn test_scoped_has_missing() {
        let c = contract(CohortRestriction::unrestricted());
        let mut lookup = CoverageLookup::build(&c);
        let afg = country_id("AFG");
        for year in [2000, 2001, 2002] {
            lookup.mark_present(&afg, 0, year).unwrap();
        }
        assert!(!lookup.has_missing_for_age(&afg, 0));
        assert!(lookup.has_missing_for_age(&afg, 1));
        assert!(lookup.has_missing_for_country(&afg));
        assert!(lookup.has_missing());
    }

    #[test]
    fn test_country_outside_grid_has_nothing_missing() {
        let c = contract(CohortRestriction::unrestricted());
        let lookup = CoverageLookup::build(&c);
        assert!(!lookup.has_missing_for_country(&country_id("ZWE")));
        assert!(!lookup.has_missing_for_age(&country_id("ZWE"), 0));
        assert!(lookup.country(&country_id("ZWE")).is_none());
    }

    // ── Contract-mandated scenario ───────────────────────────────────

    #[test]
    fn test_cohort_scenario_end_to_end() {
        // years 2000..2002, ages {0, 1}, minimum birth year 2000, one
        // country. Age 0 expects all three years; age 1 expects only
        // 2001 and 2002.
        let c = contract(CohortRestriction::new(Some(2000), None).unwrap());
        let mut lookup = CoverageLookup::build(&c);
        let afg = country_id("AFG");

        assert_eq!(lookup.total_cells(), 5);
        let age1 = lookup.country(&afg).unwrap().age(1).unwrap();
        assert_eq!(age1.status(2000), None);

        lookup.mark_present(&afg, 0, 2000).unwrap();
        lookup.mark_present(&afg, 0, 2001).unwrap();

        let ages = lookup.country(&afg).unwrap();
        assert_eq!(ages.first_age_with_missing_rows().unwrap(), 0);
        assert_eq!(ages.age(0).unwrap().first_missing_year().unwrap(), 2002);
    }
}

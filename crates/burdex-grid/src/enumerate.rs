//! # Row Enumeration — The Expected (Year, Age, Country) Cube
//!
//! Produces the lazy sequence of grid cells a contract expects data for.
//! Enumeration order is load-bearing: ages ascending, then countries in
//! contract-declared order, then years ascending, filtered by the cohort
//! restriction applied to the derived birth year (`year - age`).
//!
//! The iterator is restartable: every call to [`expected_rows`] yields an
//! independent cursor over the same immutable contract. Nothing is
//! materialized up front, so memory stays bounded even for wide year/age
//! spans over many countries.

use burdex_core::{Country, Expectations};

/// One expected cell of the grid. Ephemeral; borrows its country from the
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowKey<'a> {
    /// Calendar year of the cell.
    pub year: i32,
    /// Age of the cell.
    pub age: i32,
    /// The country, borrowed from the contract's declared list.
    pub country: &'a Country,
}

impl RowKey<'_> {
    /// The birth year this cell describes.
    pub fn birth_year(&self) -> i32 {
        self.year - self.age
    }
}

/// Begin a fresh traversal of the cells the contract expects.
///
/// Each invocation returns an independent cursor; callers may enumerate the
/// same contract any number of times, concurrently or not.
pub fn expected_rows(expectations: &Expectations) -> ExpectedRows<'_> {
    ExpectedRows {
        expectations,
        age: expectations.ages().start(),
        country_idx: 0,
        year: expectations.years().start(),
    }
}

/// Lazy cursor over the expected cells of one contract.
///
/// Yields keys in deterministic order: ages ascending, countries in
/// declared order, years ascending; cells whose birth year falls outside
/// the cohort restriction are skipped.
#[derive(Debug, Clone)]
pub struct ExpectedRows<'a> {
    expectations: &'a Expectations,
    age: i32,
    country_idx: usize,
    year: i32,
}

impl<'a> Iterator for ExpectedRows<'a> {
    type Item = RowKey<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let years = self.expectations.years();
        let ages = self.expectations.ages();
        let countries = self.expectations.countries();

        loop {
            if self.age > ages.end() {
                return None;
            }
            if self.country_idx >= countries.len() {
                self.age += 1;
                self.country_idx = 0;
                self.year = years.start();
                continue;
            }
            if self.year > years.end() {
                self.country_idx += 1;
                self.year = years.start();
                continue;
            }

            let year = self.year;
            self.year += 1;

            if self.expectations.cohorts().contains(year - self.age) {
                return Some(RowKey {
                    year,
                    age: self.age,
                    country: &countries[self.country_idx],
                });
            }
        }
    }
}

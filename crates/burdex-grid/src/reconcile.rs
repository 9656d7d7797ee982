//! # Reconciliation — Driving a Submission Through the Grid
//!
//! Consumes a stream of actual submitted rows, reduced to their
//! (country, age, year) keys, and reconciles them against a contract.
//! Out-of-contract rows are accumulated rather than aborting the run, so a
//! submission can be rejected with the full list of offending rows instead
//! of failing on the first one.

use burdex_core::{CountryId, Expectations};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coverage::CoverageLookup;
use crate::report::GapReport;

/// The key of one actual submitted row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRow {
    /// Country code of the row.
    pub country: CountryId,
    /// Age of the row.
    pub age: i32,
    /// Calendar year of the row.
    pub year: i32,
}

/// The result of reconciling one submission against one contract.
#[derive(Debug, Clone)]
pub struct ReconciliationOutcome {
    /// The coverage lookup after every submitted row was applied.
    pub lookup: CoverageLookup,
    /// Rows that targeted cells outside the expected grid, in submission
    /// order.
    pub unexpected: Vec<SubmittedRow>,
    /// The leading gaps per incomplete country.
    pub gaps: GapReport,
}

impl ReconciliationOutcome {
    /// Whether the submission covered the whole grid with no rows outside
    /// it.
    pub fn is_valid(&self) -> bool {
        self.gaps.is_complete() && self.unexpected.is_empty()
    }
}

/// Reconcile a submission against a contract.
///
/// Builds a fresh lookup, marks every submitted row, and derives the gap
/// report. Unexpected rows are collected, not fatal.
pub fn reconcile<I>(expectations: &Expectations, rows: I) -> ReconciliationOutcome
where
    I: IntoIterator<Item = SubmittedRow>,
{
    let mut lookup = CoverageLookup::build(expectations);
    let mut unexpected = Vec::new();

    for row in rows {
        // mark_present only ever raises UnexpectedRow.
        if lookup.mark_present(&row.country, row.age, row.year).is_err() {
            debug!(
                country = %row.country,
                age = row.age,
                year = row.year,
                "row outside the expected grid"
            );
            unexpected.push(row);
        }
    }

    let gaps = GapReport::from_lookup(&lookup);
    info!(
        contract = expectations.id(),
        cells = lookup.total_cells(),
        unexpected = unexpected.len(),
        incomplete_countries = gaps.gaps().len(),
        "reconciliation finished"
    );

    ReconciliationOutcome {
        lookup,
        unexpected,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::expected_rows;
    use burdex_core::{AgeSpan, CohortRestriction, Country, YearSpan};

    fn contract() -> Expectations {
        Expectations::new(
            1,
            "test",
            YearSpan::new(2000, 2001).unwrap(),
            AgeSpan::new(0, 0).unwrap(),
            CohortRestriction::unrestricted(),
            vec![Country::new("AFG", "Afghanistan").unwrap()],
            vec!["deaths".to_string()],
        )
        .unwrap()
    }

    fn full_submission(c: &Expectations) -> Vec<SubmittedRow> {
        expected_rows(c)
            .map(|k| SubmittedRow {
                country: k.country.id.clone(),
                age: k.age,
                year: k.year,
            })
            .collect()
    }

    #[test]
    fn test_complete_submission_is_valid() {
        let c = contract();
        let outcome = reconcile(&c, full_submission(&c));
        assert!(outcome.is_valid());
        assert!(outcome.unexpected.is_empty());
        assert!(!outcome.lookup.has_missing());
    }

    #[test]
    fn test_partial_submission_reports_gaps() {
        let c = contract();
        let mut rows = full_submission(&c);
        rows.pop();
        let outcome = reconcile(&c, rows);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.gaps.gaps().len(), 1);
        assert_eq!(outcome.gaps.gaps()[0].first_missing_year, 2001);
    }

    #[test]
    fn test_unexpected_rows_are_accumulated_not_fatal() {
        let c = contract();
        let mut rows = full_submission(&c);
        let stray = SubmittedRow {
            country: CountryId::new("ZWE").unwrap(),
            age: 0,
            year: 2000,
        };
        // Stray row first: subsequent rows must still be processed.
        rows.insert(0, stray.clone());
        let outcome = reconcile(&c, rows);
        assert_eq!(outcome.unexpected, vec![stray]);
        assert!(outcome.gaps.is_complete());
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_empty_submission_misses_everything() {
        let c = contract();
        let outcome = reconcile(&c, Vec::new());
        assert!(!outcome.is_valid());
        assert!(outcome.lookup.has_missing());
        assert_eq!(outcome.gaps.gaps().len(), 1);
    }
}

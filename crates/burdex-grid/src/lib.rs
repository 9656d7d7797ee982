//! # burdex-grid — Expectation Grid and Completeness Tracking
//!
//! Derives the expectation grid from a [`burdex_core::Expectations`]
//! contract: which (year, age, country) cells a submission must contain,
//! template rows for those cells, and a mutable coverage structure that
//! records which cells have actually been supplied.
//!
//! ## Modules
//!
//! - [`enumerate`] — lazy, restartable enumeration of expected row keys.
//! - [`rows`] — template row materialization (central and stochastic).
//! - [`coverage`] — the per-run coverage lookup and its completeness queries.
//! - [`reconcile`] — drives a full submission through the coverage lookup.
//! - [`report`] — human-facing gap messages derived from a coverage lookup.
//!
//! ## Ownership Model
//!
//! A contract is immutable and shared by reference across any number of
//! validation runs. Each run builds its own [`coverage::CoverageLookup`],
//! mutates it exclusively, and discards it once the run's report is
//! produced. No synchronization is needed between runs.

pub mod coverage;
pub mod enumerate;
pub mod reconcile;
pub mod report;
pub mod rows;

pub use coverage::{AgeCoverage, CoverageError, CoverageLookup, RowStatus, YearCoverage};
pub use enumerate::{expected_rows, ExpectedRows, RowKey};
pub use reconcile::{reconcile, ReconciliationOutcome, SubmittedRow};
pub use report::{Gap, GapReport};
pub use rows::{
    expected_central_rows, expected_stochastic_rows, ExpectedCentralRow, ExpectedStochasticRow,
};

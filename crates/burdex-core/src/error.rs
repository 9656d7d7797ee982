//! # Error Types — Contract Configuration Failures
//!
//! Defines the errors raised while building a reporting contract. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Configuration errors are fatal to contract construction: the caller
//!   must fix the persisted configuration, not retry.
//! - Every variant carries the offending values so a rejection message can
//!   name exactly what was wrong.

use thiserror::Error;

/// An inconsistency in a reporting contract's configuration.
///
/// Raised at construction time only. A successfully built contract can be
/// enumerated and reconciled without further error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A year or age span whose start exceeds its end.
    #[error("{field} span is inverted: {start}..={end}")]
    InvertedSpan {
        /// Which span was rejected ("years" or "ages").
        field: &'static str,
        /// Start of the rejected span.
        start: i32,
        /// End of the rejected span.
        end: i32,
    },

    /// A cohort restriction whose minimum birth year exceeds its maximum.
    #[error("cohort window is inverted: minimum birth year {minimum} > maximum birth year {maximum}")]
    InvertedCohortWindow {
        /// The minimum birth year supplied.
        minimum: i32,
        /// The maximum birth year supplied.
        maximum: i32,
    },

    /// The same country id appears more than once in the contract.
    #[error("duplicate country id in contract: {0}")]
    DuplicateCountry(String),

    /// The same outcome name appears more than once in the contract.
    #[error("duplicate outcome name in contract: {0}")]
    DuplicateOutcome(String),

    /// A country identifier that does not satisfy the code format.
    #[error("invalid country id {id:?}: {reason}")]
    InvalidCountryId {
        /// The rejected identifier.
        id: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

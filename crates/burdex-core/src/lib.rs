//! # burdex-core — Foundational Types for the Burden Reporting Stack
//!
//! This crate is the bedrock of the burden reporting expectations stack.
//! It defines the contract types from which expectation grids are derived.
//! Every other crate in the workspace depends on `burdex-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `CountryId` is a validated
//!    newtype with a checked constructor. No bare strings for identifiers.
//!
//! 2. **Validated construction, everywhere.** `YearSpan`, `AgeSpan`,
//!    `CohortRestriction`, and `Expectations` can only be built through
//!    constructors that enforce their invariants, and their `Deserialize`
//!    impls route through the same validation. An inverted range or a
//!    duplicate outcome name cannot exist at runtime.
//!
//! 3. **Immutable contracts.** `Expectations` exposes accessors only. A
//!    contract is built once from persisted configuration and shared by
//!    reference across any number of validation runs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `burdex-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod cohort;
pub mod contract;
pub mod error;
pub mod identity;
pub mod span;

// Re-export primary types for ergonomic imports.
pub use cohort::CohortRestriction;
pub use contract::{Expectations, OutcomeExpectations};
pub use error::ConfigurationError;
pub use identity::{Country, CountryId};
pub use span::{AgeSpan, YearSpan};

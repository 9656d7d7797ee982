//! # burdex-cli — Burden Reporting Command-Line Interface
//!
//! A clap-based CLI over the expectation-grid machinery.
//!
//! ## Subcommands
//!
//! - `template` — Emit empty template rows for a contract and disease
//! - `check` — Reconcile a submission against a contract and report gaps
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates; this crate only
//!   loads files, drives the library, and formats output.

pub mod check;
pub mod load;
pub mod template;

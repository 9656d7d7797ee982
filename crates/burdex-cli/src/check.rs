//! The `check` subcommand: reconcile a submission against a contract.
//!
//! Prints every out-of-contract row and every gap message, then reports
//! the overall verdict. The process exits non-zero when the submission is
//! incomplete or contains unexpected rows, so the command can gate a
//! submission pipeline.

use std::path::PathBuf;

use burdex_grid::reconcile;
use clap::Args;
use tracing::info;

use crate::load::{load_contract, load_submission};

/// Arguments for `burdex check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the contract file (JSON or YAML).
    #[arg(long)]
    pub contract: PathBuf,

    /// Path to the submission file (JSON lines of row keys).
    #[arg(long)]
    pub submission: PathBuf,
}

/// Run the subcommand. Returns the process exit code.
pub fn run(args: &CheckArgs) -> anyhow::Result<std::process::ExitCode> {
    let contract = load_contract(&args.contract)?;
    let rows = load_submission(&args.submission)?;
    info!(
        contract = contract.id(),
        submitted_rows = rows.len(),
        "checking submission"
    );

    let outcome = reconcile(&contract, rows);

    for row in &outcome.unexpected {
        println!(
            "unexpected row: country {}, age {}, year {}",
            row.country, row.age, row.year
        );
    }
    for gap in outcome.gaps.gaps() {
        println!("{gap}");
    }

    if outcome.is_valid() {
        println!("submission is complete");
        Ok(std::process::ExitCode::SUCCESS)
    } else {
        println!(
            "submission rejected: {} unexpected row(s), {} incomplete country(ies)",
            outcome.unexpected.len(),
            outcome.gaps.gaps().len()
        );
        Ok(std::process::ExitCode::FAILURE)
    }
}

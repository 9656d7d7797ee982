//! The `template` subcommand: emit empty template rows for a contract.
//!
//! Rows stream out as JSON lines in enumeration order (ages ascending,
//! countries in contract-declared order, years ascending), so the output
//! is deterministic for a given contract and nothing is buffered beyond
//! the current row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use burdex_grid::{expected_central_rows, expected_stochastic_rows};
use clap::Args;
use tracing::info;

use crate::load::load_contract;

/// Arguments for `burdex template`.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Path to the contract file (JSON or YAML).
    #[arg(long)]
    pub contract: PathBuf,

    /// Disease name stamped into every row.
    #[arg(long)]
    pub disease: String,

    /// Emit stochastic rows (with an absent run id) instead of central rows.
    #[arg(long)]
    pub stochastic: bool,

    /// Write to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the subcommand.
pub fn run(args: &TemplateArgs) -> anyhow::Result<()> {
    let contract = load_contract(&args.contract)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut count = 0usize;
    if args.stochastic {
        for row in expected_stochastic_rows(&args.disease, &contract) {
            serde_json::to_writer(&mut writer, &row)?;
            writeln!(writer)?;
            count += 1;
        }
    } else {
        for row in expected_central_rows(&args.disease, &contract) {
            serde_json::to_writer(&mut writer, &row)?;
            writeln!(writer)?;
            count += 1;
        }
    }
    writer.flush()?;

    info!(
        contract = contract.id(),
        disease = %args.disease,
        rows = count,
        stochastic = args.stochastic,
        "template generated"
    );
    Ok(())
}

//! # burdex CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Burden reporting expectations toolchain.
///
/// Generates empty data-entry templates from reporting contracts and
/// checks submissions for completeness against them.
#[derive(Parser, Debug)]
#[command(name = "burdex", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Emit empty template rows for a contract and disease.
    Template(burdex_cli::template::TemplateArgs),
    /// Reconcile a submission against a contract and report gaps.
    Check(burdex_cli::check::CheckArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Template(args) => {
            burdex_cli::template::run(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(args) => burdex_cli::check::run(&args),
    }
}

//! Contract and submission file loading.
//!
//! Contract files may be JSON or YAML, chosen by extension; submissions are
//! JSON lines, one row key per line. Validation happens inside the
//! deserializers (`burdex-core` routes `Deserialize` through the checked
//! constructors), so a file that parses is a file that is consistent.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use burdex_core::Expectations;
use burdex_grid::SubmittedRow;

/// Load a reporting contract from a JSON or YAML file.
pub fn load_contract(path: &Path) -> anyhow::Result<Expectations> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading contract file {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let contract = match extension {
        "json" => serde_json::from_str(&raw)
            .with_context(|| format!("parsing contract file {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing contract file {}", path.display()))?,
        other => bail!("unsupported contract file extension {other:?} (expected json or yaml)"),
    };
    Ok(contract)
}

/// Load a submission: JSON lines, one `(country, age, year)` key per line.
///
/// Blank lines are skipped. A malformed line fails the load with its line
/// number.
pub fn load_submission(path: &Path) -> anyhow::Result<Vec<SubmittedRow>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading submission file {}", path.display()))?;
    let mut rows = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: SubmittedRow = serde_json::from_str(line).with_context(|| {
            format!("parsing submission row at {}:{}", path.display(), idx + 1)
        })?;
        rows.push(row);
    }
    Ok(rows)
}

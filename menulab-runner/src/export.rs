//! JSON artifact export.
//!
//! Reports are written as pretty JSON under an output directory, named by
//! the run-id prefix so repeated runs with the same config overwrite their
//! own artifact instead of accumulating copies.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::monte_carlo::McReport;
use crate::simulation::SimReport;

/// Errors from artifact export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write a simulation report; returns the artifact path.
pub fn save_report(report: &SimReport, output_dir: &Path) -> Result<PathBuf, ExportError> {
    write_json(
        output_dir,
        &format!("run_{}.json", report.run_id.short()),
        report,
    )
}

/// Write a Monte Carlo report; returns the artifact path.
pub fn save_mc_report(report: &McReport, output_dir: &Path) -> Result<PathBuf, ExportError> {
    write_json(
        output_dir,
        &format!("mc_{}.json", report.run_id.short()),
        report,
    )
}

fn write_json<T: serde::Serialize>(
    output_dir: &Path,
    file_name: &str,
    value: &T,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json)?;
    Ok(path)
}

//! Export command - write a table out as CSV.

use std::error::Error;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::data::Workspace;

pub fn run(data_dir: &Path, table: &str, output: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    let export = dash.export(table)?;
    let path = output.unwrap_or_else(|| PathBuf::from(&export.filename));
    std::fs::write(&path, &export.bytes)?;

    let rows = export.as_text().lines().count().saturating_sub(1);
    println!(
        "{} exported {} rows from {} to {}",
        "✓".green(),
        rows,
        table.white().bold(),
        path.display()
    );
    Ok(())
}

//! Import command - bulk-append a CSV file into a table.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use colored::Colorize;

use crate::data::Workspace;

pub fn run(data_dir: &Path, table: &str, file: &Path) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    let reader = File::open(file).map_err(|e| format!("opening {}: {e}", file.display()))?;
    let report = dash.import(table, reader)?;
    workspace.save_table(table)?;

    println!(
        "{} imported {} rows into {} ({})",
        "✓".green(),
        report.rows_appended,
        table.white().bold(),
        report.sha256
    );
    Ok(())
}

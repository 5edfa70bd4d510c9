//! Show command - print every row of a table.

use std::error::Error;
use std::path::Path;

use colored::Colorize;

use crate::data::Workspace;

pub fn run(data_dir: &Path, table: &str, json_output: bool) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    let descriptor = dash.describe(table)?;
    let records = dash.browse(table)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{} ({} rows)", table.cyan().bold(), records.len());
    let header: Vec<&str> = descriptor.column_names().collect();
    println!("  {}", header.join(" | ").bold());
    for record in &records {
        let cells: Vec<String> = record.values().map(|v| v.to_string()).collect();
        println!("  {}", cells.join(" | "));
    }
    Ok(())
}

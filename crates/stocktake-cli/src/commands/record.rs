//! Record command - print one record, transposed.

use std::error::Error;
use std::path::Path;

use colored::Colorize;
use stocktake::Value;

use crate::data::Workspace;

pub fn run(data_dir: &Path, table: &str, id: &str, json_output: bool) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    let identifier = Value::parse(id);
    let record = dash
        .record(table, &identifier)?
        .ok_or_else(|| format!("no {table} record with identifier {id}"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{} {}", table.cyan().bold(), id.white());
    for (column, value) in &record {
        println!("  {:<20} {}", column.bold(), value);
    }
    Ok(())
}

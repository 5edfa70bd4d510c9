//! Add command - insert a record from column=value pairs.

use std::error::Error;
use std::path::Path;

use colored::Colorize;

use crate::data::{Workspace, parse_set_pairs};

pub fn run(data_dir: &Path, table: &str, set: &[String]) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    let values = parse_set_pairs(set)?;

    // Catch typos before the statement is built; the identifier column
    // is assigned by the store and cannot be supplied
    let descriptor = dash.describe(table)?;
    let identifier = &descriptor.identifier_column().name;
    for column in values.keys() {
        if column == identifier {
            return Err(format!("'{column}' is the identifier column and is assigned automatically").into());
        }
        if descriptor.column(column).is_none() {
            return Err(format!("unknown column '{column}' in '{table}'").into());
        }
    }

    dash.add(table, &values)?;
    workspace.save_table(table)?;

    println!("{} added 1 row to {}", "✓".green(), table.white().bold());
    Ok(())
}

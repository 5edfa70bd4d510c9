//! Delete command - remove one record by identifier.

use std::error::Error;
use std::path::Path;

use colored::Colorize;
use stocktake::Value;

use crate::data::Workspace;

pub fn run(data_dir: &Path, table: &str, id: &str) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    let affected = dash.delete(table, &Value::parse(id))?;
    if affected == 0 {
        return Err(format!("no {table} record with identifier {id}").into());
    }
    workspace.save_table(table)?;

    println!(
        "{} deleted {} record {}",
        "✓".green(),
        table.white().bold(),
        id
    );
    Ok(())
}

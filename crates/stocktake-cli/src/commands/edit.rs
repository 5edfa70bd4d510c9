//! Edit command - full-row overwrite of one record.

use std::error::Error;
use std::path::Path;

use colored::Colorize;
use stocktake::Value;

use crate::data::{Workspace, parse_set_pairs};

pub fn run(data_dir: &Path, table: &str, id: &str, set: &[String]) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    let identifier = Value::parse(id);
    let form = dash
        .edit_form(table, &identifier)?
        .ok_or_else(|| format!("no {table} record with identifier {id}"))?;

    let submitted = parse_set_pairs(set)?;
    for column in submitted.keys() {
        if !form.fields.iter().any(|f| &f.column == column) {
            return Err(format!("'{column}' is not an editable column of '{table}'").into());
        }
    }

    // The form pre-fills current values, so the update rewrites the
    // whole row no matter how few pairs were supplied
    let values = form.merge_submission(&submitted);
    dash.update(table, &identifier, &values)?;
    workspace.save_table(table)?;

    println!(
        "{} updated {} record {}",
        "✓".green(),
        table.white().bold(),
        id
    );
    Ok(())
}

//! Tables command - list the catalog with row counts.

use std::error::Error;
use std::path::Path;

use colored::Colorize;

use crate::data::Workspace;

pub fn run(data_dir: &Path, json_output: bool) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    if json_output {
        let listing: Vec<_> = dash
            .tables()
            .iter()
            .map(|table| {
                let rows = dash.browse(table).map(|r| r.len()).unwrap_or(0);
                serde_json::json!({ "table": table, "rows": rows })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "Tables".cyan().bold());
    for table in dash.tables() {
        let rows = dash.browse(table)?.len();
        println!("  {:<16} {} rows", table.white(), rows);
    }
    Ok(())
}

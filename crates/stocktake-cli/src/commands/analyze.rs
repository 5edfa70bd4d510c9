//! Analyze command - run or plan one of the canned analyses.

use std::error::Error;
use std::path::Path;

use colored::Colorize;
use stocktake::Analysis;

use crate::data::Workspace;

pub fn run(data_dir: &Path, analysis: &str, json_output: bool) -> Result<(), Box<dyn Error>> {
    let analysis: Analysis = analysis.parse()?;
    let workspace = Workspace::open(data_dir)?;
    let dash = workspace.dashboard();

    match dash.analyze(analysis) {
        Ok(report) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            println!("{}", report.analysis.cyan().bold());
            println!("  {}", report.data.columns.join(" | ").bold());
            for row in &report.data.rows {
                let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                println!("  {}", cells.join(" | "));
            }
            for chart in &report.charts {
                println!(
                    "  {} {:?} chart: {} ({} vs {})",
                    "→".cyan(),
                    chart.kind,
                    chart.title,
                    chart.y,
                    chart.x
                );
            }
            Ok(())
        }
        Err(err) => {
            // Local CSV mode has no aggregation backend; show what the
            // analysis would draw instead of failing outright
            if json_output {
                let plan = serde_json::json!({
                    "analysis": analysis.label(),
                    "query": analysis.query(),
                    "charts": analysis.charts(),
                    "note": err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&plan)?);
                return Ok(());
            }
            println!("{}", analysis.label().cyan().bold());
            for chart in analysis.charts() {
                println!("  {:?} chart: {}", chart.kind, chart.title);
            }
            println!("  {}", analysis.query().dimmed());
            println!("  {} {}", "note:".yellow(), err);
            Ok(())
        }
    }
}

//! Dashboard command - headline metrics.

use std::error::Error;
use std::path::Path;

use colored::Colorize;

use crate::data::Workspace;

pub fn run(data_dir: &Path, json_output: bool) -> Result<(), Box<dyn Error>> {
    let workspace = Workspace::open(data_dir)?;
    let metrics = workspace.dashboard().metrics()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!("{}", "System Dashboard".cyan().bold());
    println!("  {:<20} {}", "Total Products".bold(), metrics.total_products);
    println!("  {:<20} {}", "Total Sales".bold(), metrics.total_sales);
    println!(
        "  {:<20} {}",
        "Out of Stock Items".bold(),
        if metrics.out_of_stock_items > 0 {
            metrics.out_of_stock_items.to_string().red().to_string()
        } else {
            metrics.out_of_stock_items.to_string()
        }
    );
    println!(
        "  {:<20} {}",
        "Total Customers".bold(),
        metrics.total_customers
    );
    Ok(())
}

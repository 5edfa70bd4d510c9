//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stocktake: admin shell for the retail database
#[derive(Parser)]
#[command(name = "stocktake")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding one CSV per table
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show headline counts (products, sales, out-of-stock, customers)
    Dashboard,

    /// List the tables in the catalog
    Tables,

    /// Print every row of a table
    Show {
        /// Table name (as listed by `tables`)
        #[arg(value_name = "TABLE")]
        table: String,
    },

    /// Print one record by identifier
    Record {
        #[arg(value_name = "TABLE")]
        table: String,

        /// Identifier value (first column of the table)
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Insert a record built from column=value pairs
    Add {
        #[arg(value_name = "TABLE")]
        table: String,

        /// Field values, e.g. --set name=Widget --set cost_price=9.99
        #[arg(short, long = "set", value_name = "COL=VALUE")]
        set: Vec<String>,
    },

    /// Overwrite a record; unspecified fields keep their stored values
    Edit {
        #[arg(value_name = "TABLE")]
        table: String,

        #[arg(value_name = "ID")]
        id: String,

        /// Field values to change
        #[arg(short, long = "set", value_name = "COL=VALUE")]
        set: Vec<String>,
    },

    /// Delete one record by identifier
    Delete {
        #[arg(value_name = "TABLE")]
        table: String,

        #[arg(value_name = "ID")]
        id: String,
    },

    /// Export a table as CSV (filename defaults to <table>_<timestamp>.csv)
    Export {
        #[arg(value_name = "TABLE")]
        table: String,

        /// Output path (default: conventional name in the working directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Bulk-append a CSV file into a table
    Import {
        #[arg(value_name = "TABLE")]
        table: String,

        /// CSV file with a header row
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Run (or plan) one of the canned analyses
    Analyze {
        /// One of: out-of-stock, sales-trend, dead-stock, returns,
        /// employee-performance, store-comparison
        #[arg(value_name = "ANALYSIS")]
        analysis: String,
    },
}

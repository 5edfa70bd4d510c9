//! Stocktake CLI - admin shell over the retail schema.

mod cli;
mod commands;
mod data;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dashboard => commands::dashboard::run(&cli.data_dir, cli.json),

        Commands::Tables => commands::tables::run(&cli.data_dir, cli.json),

        Commands::Show { table } => commands::show::run(&cli.data_dir, &table, cli.json),

        Commands::Record { table, id } => {
            commands::record::run(&cli.data_dir, &table, &id, cli.json)
        }

        Commands::Add { table, set } => commands::add::run(&cli.data_dir, &table, &set),

        Commands::Edit { table, id, set } => {
            commands::edit::run(&cli.data_dir, &table, &id, &set)
        }

        Commands::Delete { table, id } => commands::delete::run(&cli.data_dir, &table, &id),

        Commands::Export { table, output } => {
            commands::export::run(&cli.data_dir, &table, output)
        }

        Commands::Import { table, file } => commands::import::run(&cli.data_dir, &table, &file),

        Commands::Analyze { analysis } => {
            commands::analyze::run(&cli.data_dir, &analysis, cli.json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

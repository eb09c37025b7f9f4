//! CLI Application

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use loanfee_utils::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str())
    ).init();

    let cli = Cli::parse();
    let table_path = cli.table.unwrap_or_else(|| config.fee_table_path.clone());

    match cli.command {
        Commands::Fee(args) => commands::fee::handle(&table_path, args)?,
        Commands::Table(args) => commands::table::handle(&table_path, args)?,
        Commands::Config => commands::config::handle(&config)?,
    }

    Ok(())
}

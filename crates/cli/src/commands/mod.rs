//! CLI Commands

pub mod config;
pub mod fee;
pub mod table;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loanfee_core::{FeeCalculator, FileFeeStructureLoader};

/// Loan origination fee calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the fee structure JSON file
    #[arg(long, global = true, env = "FEE_TABLE_PATH")]
    pub table: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the fee for a loan
    Fee(fee::FeeArgs),

    /// Inspect the fee structure
    Table(table::TableArgs),

    /// Show configuration
    Config,
}

/// Nạp bảng phí, lỗi nạp được báo riêng với lỗi tính phí
pub fn load_calculator(path: &str) -> Result<FeeCalculator> {
    FeeCalculator::new(&FileFeeStructureLoader::new(path))
        .with_context(|| format!("failed to load fee structure from {}", path))
}

//! Table commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use loanfee_utils::format_amount;

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(subcommand)]
    pub action: TableAction,
}

#[derive(Subcommand, Debug)]
pub enum TableAction {
    /// List available terms
    Terms,

    /// Show breakpoints of one term
    Show {
        /// Loan term in months
        #[arg(short, long)]
        term: u32,
    },
}

pub fn handle(table_path: &str, args: TableArgs) -> Result<()> {
    let calculator = super::load_calculator(table_path)?;
    let structure = calculator.structure();

    match args.action {
        TableAction::Terms => {
            println!("📋 Terms ({}):", structure.len());
            for (term, breakpoints) in structure.iter() {
                let min = breakpoints.min_amount().map(format_amount).unwrap_or_default();
                let max = breakpoints.max_amount().map(format_amount).unwrap_or_default();
                println!(
                    "  - {} months: {} breakpoints, {} - {}",
                    term,
                    breakpoints.len(),
                    min,
                    max
                );
            }
        }

        TableAction::Show { term } => {
            let Some(breakpoints) = structure.breakpoints(term) else {
                bail!("❌ No fee structure for term {} months", term);
            };
            println!("📋 Term {} months:", term);
            for (amount, fee) in breakpoints.iter() {
                println!("  {:>10} -> {}", format_amount(amount), format_amount(fee));
            }
        }
    }

    Ok(())
}

//! Fee command

use anyhow::{bail, Result};
use clap::Args;
use loanfee_core::LoanProposal;
use loanfee_utils::{format_amount, validate_loan_query};

#[derive(Args, Debug)]
pub struct FeeArgs {
    /// Loan term in months
    #[arg(short, long)]
    pub term: String,

    /// Loan amount
    #[arg(short, long)]
    pub amount: String,

    /// Print the full quote as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle(table_path: &str, args: FeeArgs) -> Result<()> {
    let (term, amount) = match validate_loan_query(&args.term, &args.amount) {
        Ok(query) => query,
        Err(result) => bail!("❌ Invalid input: {}", result.message()),
    };

    let calculator = super::load_calculator(table_path)?;
    let proposal = LoanProposal::new(term, amount)?;

    let quote = match calculator.quote(&proposal) {
        Ok(quote) => quote,
        Err(e) => {
            log::warn!("fee calculation failed for term {} amount {}: {}", term, amount, e);
            bail!("❌ {}", e);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("💰 Fee: {}", format_amount(quote.fee));
    println!("   Term: {} months", quote.term);
    println!("   Amount: {}", format_amount(quote.amount));
    println!("   Total repayable: {}", format_amount(quote.total));
    match quote.bounds {
        Some(bounds) => println!(
            "   Interpolated between {} and {} (base fee {})",
            format_amount(bounds.lower()),
            format_amount(bounds.upper()),
            format_amount(quote.base_fee)
        ),
        None => println!("   Exact breakpoint (base fee {})", format_amount(quote.base_fee)),
    }

    Ok(())
}

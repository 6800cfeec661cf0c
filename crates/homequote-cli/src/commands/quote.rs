use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use homequote_core::quote::{self, LoanInputs};
use homequote_core::rates;
use homequote_core::schedule;

use crate::input;

/// Arguments for a payment quote
#[derive(Args)]
pub struct QuoteArgs {
    /// Contract price of the home
    #[arg(long)]
    pub home_price: Option<Decimal>,

    /// Down payment as a percentage of the price (10 = 10%)
    #[arg(long, default_value = "20")]
    pub down_payment_percent: Decimal,

    /// Annual interest rate as a percentage; defaults to the term's survey rate
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long, default_value = "30")]
    pub term_years: u32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for an amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: QuoteArgs,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args)?;
    Ok(serde_json::to_value(quote::quote(&inputs))?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args.loan)?;
    Ok(serde_json::to_value(schedule::amortization_schedule(
        &inputs,
    ))?)
}

/// Build LoanInputs from a JSON file, piped stdin, or individual flags, in
/// that order of precedence. A missing --rate falls back to the survey rate
/// for the requested term.
fn resolve_inputs(args: &QuoteArgs) -> Result<LoanInputs, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok(input::read_json(path)?);
    }
    if let Some(data) = input::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let home_price = args
        .home_price
        .ok_or("--home-price is required (or pass --input / pipe JSON)")?;
    let annual_rate_percent = match args.rate {
        Some(rate) => rate,
        None => rates::reference_rate_for_years(args.term_years)?,
    };

    Ok(LoanInputs {
        home_price,
        down_payment_percent: args.down_payment_percent,
        annual_rate_percent,
        term_years: args.term_years,
    })
}

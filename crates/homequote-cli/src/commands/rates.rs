use clap::Args;
use serde_json::Value;

use homequote_core::rates;

/// Arguments for the reference-rate table
#[derive(Args)]
pub struct RatesArgs {
    /// Only report the rate for this term
    #[arg(long)]
    pub term_years: Option<u32>,
}

pub fn run_rates(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match args.term_years {
        Some(years) => {
            let rate = rates::reference_rate_for_years(years)?;
            Ok(serde_json::json!({
                "term_years": years,
                "rate_percent": rate,
            }))
        }
        None => Ok(serde_json::to_value(rates::reference_rate_table())?),
    }
}

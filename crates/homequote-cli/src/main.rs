mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::lead::LeadCheckArgs;
use commands::quote::{QuoteArgs, ScheduleArgs};
use commands::rates::RatesArgs;

/// Mortgage payment quotes for the home-buyer page
#[derive(Parser)]
#[command(
    name = "hq",
    version,
    about = "Mortgage payment quotes with decimal precision",
    long_about = "CLI companion to the home-buyer landing page calculator. \
                  Produces monthly-payment quotes, full amortization schedules, \
                  the survey-rate defaults per loan term, and lead-form checks."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the monthly payment for a loan configuration
    Quote(QuoteArgs),
    /// Expand a loan configuration into its amortization schedule
    Schedule(ScheduleArgs),
    /// Survey reference rates per offered loan term
    Rates(RatesArgs),
    /// Validate a lead form submission
    LeadCheck(LeadCheckArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Schedule(args) => commands::quote::run_schedule(args),
        Commands::Rates(args) => commands::rates::run_rates(args),
        Commands::LeadCheck(args) => commands::lead::run_lead_check(args),
        Commands::Version => {
            println!("hq {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

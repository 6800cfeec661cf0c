use clap::Args;
use serde_json::Value;

use homequote_core::lead::LeadForm;

use crate::input;

/// Arguments for lead-form validation
#[derive(Args)]
pub struct LeadCheckArgs {
    /// Path to JSON input file with the form fields
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_lead_check(args: LeadCheckArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let form: LeadForm = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for lead-check".into());
    };

    let issues = form.validate();
    Ok(serde_json::json!({
        "valid": issues.is_empty(),
        "issues": issues,
    }))
}

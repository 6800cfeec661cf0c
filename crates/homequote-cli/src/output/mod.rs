pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Field names whose values are dollar amounts and should be rendered
/// through the display formatter in human-facing output.
pub fn is_money_field(key: &str) -> bool {
    matches!(
        key,
        "home_price"
            | "down_payment_amount"
            | "principal"
            | "monthly_payment"
            | "total_payment"
            | "total_interest"
            | "payment"
            | "interest"
            | "balance"
            | "total_paid"
    )
}

/// Render a JSON value for display, formatting money fields as whole dollars.
pub fn display_value(key: &str, value: &Value) -> String {
    if is_money_field(key) {
        if let Some(amount) = value.as_str().and_then(|s| s.parse().ok()) {
            return homequote_core::format::usd(amount);
        }
    }
    plain_value(value)
}

pub fn plain_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(plain_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

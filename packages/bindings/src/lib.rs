use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payment quoting
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_quote(input_json: String) -> NapiResult<String> {
    let inputs: homequote_core::quote::LoanInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homequote_core::quote::quote(&inputs);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let inputs: homequote_core::quote::LoanInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homequote_core::schedule::amortization_schedule(&inputs);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reference rates
// ---------------------------------------------------------------------------

#[napi]
pub fn reference_rates() -> NapiResult<String> {
    let table = homequote_core::rates::reference_rate_table();
    serde_json::to_string(&table).map_err(to_napi_error)
}

#[napi]
pub fn reference_rate_for_term(years: u32) -> NapiResult<String> {
    let rate = homequote_core::rates::reference_rate_for_years(years).map_err(to_napi_error)?;
    serde_json::to_string(&rate).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Lead form
// ---------------------------------------------------------------------------

#[napi]
pub fn validate_lead(input_json: String) -> NapiResult<String> {
    let form: homequote_core::lead::LeadForm =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let issues = form.validate();
    let report = serde_json::json!({
        "valid": issues.is_empty(),
        "issues": issues,
    });
    serde_json::to_string(&report).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_usd(amount: String) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = amount.parse().map_err(to_napi_error)?;
    Ok(homequote_core::format::usd(amount))
}

//! Fixed-rate mortgage payment quoting.
//!
//! The single computational core of the buyer landing page: four editable
//! loan inputs in, five derived payment figures out. Pure and total; the
//! degenerate-input policy (any zero component quotes as zero) is part of
//! the page's observable contract. All math in `rust_decimal::Decimal`.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Percent};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PERCENT_SCALE: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Rates above this are outside anything the page would ever pre-fill.
const RATE_WARNING_CEILING: Decimal = dec!(20);

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// The four user-editable loan controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Contract price of the home.
    pub home_price: Money,
    /// Down payment as a percentage of the price (10 = 10%).
    pub down_payment_percent: Percent,
    /// Annual interest rate as a percentage (6.5 = 6.5%).
    pub annual_rate_percent: Percent,
    /// Loan term in whole years.
    pub term_years: u32,
}

/// Payment figures derived from [`LoanInputs`]. Recomputed as a unit on every
/// input change; never stored independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanDerived {
    pub down_payment_amount: Money,
    pub principal: Money,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Standard fixed-rate annuity payment, derived atomically from the inputs.
///
/// Total over all numeric inputs and never fails. If the principal, the
/// monthly rate, or the payment count is not strictly positive, the three
/// payment figures are zero. A zero-rate loan is deliberately NOT quoted as
/// principal / n: the page has always treated a zero component as not enough
/// information to quote, and downstream consumers rely on that.
pub fn compute_payment(inputs: &LoanInputs) -> LoanDerived {
    let down_payment_amount = inputs.home_price * inputs.down_payment_percent / PERCENT_SCALE;
    let principal = inputs.home_price - down_payment_amount;
    let monthly_rate = inputs.annual_rate_percent / PERCENT_SCALE / MONTHS_PER_YEAR;
    let payment_count = inputs.term_years * 12;

    if principal <= Decimal::ZERO || monthly_rate <= Decimal::ZERO || payment_count == 0 {
        return LoanDerived {
            down_payment_amount,
            principal,
            monthly_payment: Decimal::ZERO,
            total_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
        };
    }

    let growth = (Decimal::ONE + monthly_rate).powi(i64::from(payment_count));
    let monthly_payment = principal * (monthly_rate * growth) / (growth - Decimal::ONE);
    let total_payment = monthly_payment * Decimal::from(payment_count);
    let total_interest = total_payment - principal;

    LoanDerived {
        down_payment_amount,
        principal,
        monthly_payment,
        total_payment,
        total_interest,
    }
}

/// Envelope form of [`compute_payment`] with the page's warning policy.
///
/// Out-of-range input downgrades to a warning rather than an error: the
/// calculator is total by contract, and range clamping belongs to the form
/// layer in front of it.
pub fn quote(inputs: &LoanInputs) -> ComputationOutput<LoanDerived> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    if inputs.home_price < Decimal::ZERO {
        warnings.push("home_price is negative; derived figures are meaningless".to_string());
    }
    if inputs.down_payment_percent < Decimal::ZERO || inputs.down_payment_percent > PERCENT_SCALE {
        warnings.push("down_payment_percent is outside [0, 100]".to_string());
    }
    if inputs.annual_rate_percent > RATE_WARNING_CEILING {
        warnings.push(format!(
            "annual_rate_percent {} is above any survey rate the page quotes",
            inputs.annual_rate_percent
        ));
    }

    let derived = compute_payment(inputs);

    // Historic contract: a 0% rate on a live principal quotes as zero, not as
    // principal / months. Flag it so callers know it was not an oversight.
    if derived.principal > Decimal::ZERO
        && inputs.annual_rate_percent <= Decimal::ZERO
        && inputs.term_years > 0
    {
        warnings.push(
            "zero interest rate: payment quoted as 0, not principal / months".to_string(),
        );
    }

    with_metadata(
        "Fixed-rate annuity: P * r(1+r)^n / ((1+r)^n - 1); any zero component quotes as zero",
        inputs,
        warnings,
        start.elapsed().as_micros() as u64,
        derived,
    )
}

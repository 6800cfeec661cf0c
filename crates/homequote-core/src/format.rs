//! Display formatting for the payment widgets.
//!
//! Presentation only; the computational contract stays in [`crate::quote`].
//! The page shows whole dollars, so the one testable rule here is rounding
//! to the nearest unit.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Whole-dollar display string: `$1,234`, `-$1,234` for negatives.
///
/// Rounds half away from zero, matching how the page has always shown
/// $0.50 as $1.
pub fn usd(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}", sign, group_thousands(&rounded.abs().normalize().to_string()))
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

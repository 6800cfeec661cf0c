//! Month-by-month amortization of the quoted payment.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::quote::{compute_payment, LoanInputs};
use crate::types::Money;

/// Balance below this is treated as fully paid.
const BALANCE_EPSILON: Decimal = dec!(0.01);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub rows: Vec<ScheduleRow>,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// Expand a loan configuration into its full payment schedule.
///
/// Rows are rounded to cents as a statement would show them; the final month
/// absorbs residual rounding so the balance lands on exactly zero. Inputs
/// that [`compute_payment`] refuses to quote produce an empty schedule.
pub fn amortization_schedule(inputs: &LoanInputs) -> ScheduleOutput {
    let derived = compute_payment(inputs);
    if derived.monthly_payment <= Decimal::ZERO {
        return ScheduleOutput {
            rows: Vec::new(),
            total_paid: Decimal::ZERO,
            total_interest: Decimal::ZERO,
        };
    }

    let monthly_rate = inputs.annual_rate_percent / dec!(100) / dec!(12);
    let months = inputs.term_years * 12;
    let scheduled_payment = derived.monthly_payment.round_dp(2);

    let mut balance = derived.principal;
    let mut rows = Vec::with_capacity(months as usize);
    let mut total_paid = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=months {
        let interest = (balance * monthly_rate).round_dp(2);
        let mut principal_part = scheduled_payment - interest;
        let mut payment = scheduled_payment;

        // Final payment clears the remaining balance, rounding drift included.
        if month == months || principal_part >= balance - BALANCE_EPSILON {
            principal_part = balance;
            payment = principal_part + interest;
        }

        balance -= principal_part;
        total_paid += payment;
        total_interest += interest;

        rows.push(ScheduleRow {
            month,
            payment,
            interest,
            principal: principal_part,
            balance,
        });

        if balance <= Decimal::ZERO {
            break;
        }
    }

    ScheduleOutput {
        rows,
        total_paid,
        total_interest,
    }
}

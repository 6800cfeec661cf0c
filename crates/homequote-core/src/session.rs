//! Editable calculator state behind the page's controls.
//!
//! Owns the [`LoanInputs`] record and the one piece of UI policy that sits
//! above the pure math: changing the loan term re-applies that term's survey
//! rate, but only until the user edits the rate themselves. Derived figures
//! are never cached; `derived()` recomputes from current inputs so the
//! display can never mix old and new values.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::quote::{compute_payment, LoanDerived, LoanInputs};
use crate::rates::{reference_rate, LoanTerm};
use crate::types::{Money, Percent};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorSession {
    inputs: LoanInputs,
    rate_overridden: bool,
}

impl CalculatorSession {
    /// Fresh session pre-filled with the term's survey rate.
    pub fn new(home_price: Money, down_payment_percent: Percent, term: LoanTerm) -> Self {
        CalculatorSession {
            inputs: LoanInputs {
                home_price,
                down_payment_percent,
                annual_rate_percent: reference_rate(term),
                term_years: term.years(),
            },
            rate_overridden: false,
        }
    }

    pub fn inputs(&self) -> &LoanInputs {
        &self.inputs
    }

    pub fn set_home_price(&mut self, price: Money) {
        self.inputs.home_price = price;
    }

    pub fn set_down_payment_percent(&mut self, percent: Percent) {
        self.inputs.down_payment_percent = percent;
    }

    /// An explicit rate edit wins over term defaults from then on.
    pub fn set_rate(&mut self, rate_percent: Percent) {
        self.inputs.annual_rate_percent = rate_percent;
        self.rate_overridden = true;
    }

    /// Changing the term re-applies that term's survey rate unless the user
    /// has edited the rate.
    pub fn set_term(&mut self, term: LoanTerm) {
        self.inputs.term_years = term.years();
        if !self.rate_overridden {
            self.inputs.annual_rate_percent = reference_rate(term);
        }
    }

    /// Current projection, recomputed on every call.
    pub fn derived(&self) -> LoanDerived {
        compute_payment(&self.inputs)
    }
}

impl Default for CalculatorSession {
    /// The worked example the page opens with: $650k, 10% down, 30-year.
    fn default() -> Self {
        CalculatorSession::new(dec!(650_000), dec!(10), LoanTerm::Years30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_term_change_updates_default_rate() {
        let mut session = CalculatorSession::default();
        assert_eq!(session.inputs().annual_rate_percent, dec!(6.5));

        session.set_term(LoanTerm::Years15);
        assert_eq!(session.inputs().annual_rate_percent, dec!(5.875));
        assert_eq!(session.inputs().term_years, 15);
    }

    #[test]
    fn test_user_rate_survives_term_changes() {
        let mut session = CalculatorSession::default();
        session.set_rate(dec!(5.99));

        session.set_term(LoanTerm::Years15);
        session.set_term(LoanTerm::Years20);
        assert_eq!(session.inputs().annual_rate_percent, dec!(5.99));
        assert_eq!(session.inputs().term_years, 20);
    }

    #[test]
    fn test_derived_tracks_every_edit() {
        let mut session = CalculatorSession::default();
        let before = session.derived();

        session.set_home_price(dec!(700_000));
        let after = session.derived();
        assert!(after.monthly_payment > before.monthly_payment);
        assert_eq!(after.down_payment_amount, dec!(70_000));
    }

    #[test]
    fn test_derived_is_all_or_nothing() {
        let mut session = CalculatorSession::default();
        session.set_down_payment_percent(dec!(100));
        let out = session.derived();
        // No stale figure survives the edit that zeroed the principal.
        assert_eq!(out.principal, Decimal::ZERO);
        assert_eq!(out.monthly_payment, Decimal::ZERO);
        assert_eq!(out.total_payment, Decimal::ZERO);
        assert_eq!(out.total_interest, Decimal::ZERO);
    }
}

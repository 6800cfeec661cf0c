//! Survey reference rates keyed by loan term.
//!
//! PMMS-style snapshot values used only to pre-fill the rate control. The
//! session layer guarantees they never override a rate the user typed.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HomeQuoteError;
use crate::types::Percent;
use crate::HomeQuoteResult;

/// Loan terms the page actually offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanTerm {
    Years15,
    Years20,
    Years30,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 3] = [LoanTerm::Years15, LoanTerm::Years20, LoanTerm::Years30];

    pub fn years(self) -> u32 {
        match self {
            LoanTerm::Years15 => 15,
            LoanTerm::Years20 => 20,
            LoanTerm::Years30 => 30,
        }
    }

    pub fn from_years(years: u32) -> Option<LoanTerm> {
        match years {
            15 => Some(LoanTerm::Years15),
            20 => Some(LoanTerm::Years20),
            30 => Some(LoanTerm::Years30),
            _ => None,
        }
    }
}

/// One row of the published table, as the CLI and bindings report it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceRate {
    pub term_years: u32,
    pub rate_percent: Percent,
}

/// Survey rate for a term, on the 0-100 scale the page's controls use.
pub fn reference_rate(term: LoanTerm) -> Percent {
    match term {
        LoanTerm::Years15 => dec!(5.875),
        LoanTerm::Years20 => dec!(6.125),
        LoanTerm::Years30 => dec!(6.5),
    }
}

/// Survey rate looked up by raw year count; errors on terms the page does
/// not offer.
pub fn reference_rate_for_years(years: u32) -> HomeQuoteResult<Percent> {
    LoanTerm::from_years(years)
        .map(reference_rate)
        .ok_or(HomeQuoteError::UnsupportedTerm { years })
}

/// The full published table, longest term last.
pub fn reference_rate_table() -> Vec<ReferenceRate> {
    LoanTerm::ALL
        .iter()
        .map(|term| ReferenceRate {
            term_years: term.years(),
            rate_percent: reference_rate(*term),
        })
        .collect()
}

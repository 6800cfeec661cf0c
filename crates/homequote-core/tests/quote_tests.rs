use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use homequote_core::format;
use homequote_core::quote::{self, LoanInputs};
use homequote_core::rates::LoanTerm;
use homequote_core::session::CalculatorSession;

// ===========================================================================
// End-to-end quote scenarios, as the page's widgets consume them
// ===========================================================================

fn inputs(price: Decimal, down_pct: Decimal, rate_pct: Decimal, years: u32) -> LoanInputs {
    LoanInputs {
        home_price: price,
        down_payment_percent: down_pct,
        annual_rate_percent: rate_pct,
        term_years: years,
    }
}

#[test]
fn test_worked_example_through_display() {
    // $650k home, 10% down, 6.5% for 30 years: the figures shown on the page.
    let out = quote::quote(&inputs(dec!(650_000), dec!(10), dec!(6.5), 30));
    let d = &out.result;

    assert_eq!(format::usd(d.down_payment_amount), "$65,000");
    assert_eq!(format::usd(d.principal), "$585,000");
    assert_eq!(format::usd(d.monthly_payment), "$3,698");
    assert_eq!(format::usd(d.total_payment), "$1,331,135");
    assert_eq!(format::usd(d.total_interest), "$746,135");
    assert!(out.warnings.is_empty());
}

#[test]
fn test_all_degenerate_components_quote_as_zero() {
    let zeroing_edits = [
        inputs(Decimal::ZERO, dec!(10), dec!(6.5), 30),  // no price
        inputs(dec!(650_000), dec!(100), dec!(6.5), 30), // fully paid down
        inputs(dec!(300_000), dec!(20), Decimal::ZERO, 30), // zero rate
        inputs(dec!(650_000), dec!(10), dec!(6.5), 0),   // no term
    ];
    for inp in zeroing_edits {
        let d = quote::quote(&inp).result;
        assert_eq!(d.monthly_payment, Decimal::ZERO);
        assert_eq!(d.total_payment, Decimal::ZERO);
        assert_eq!(d.total_interest, Decimal::ZERO);
    }
}

#[test]
fn test_envelope_echoes_assumptions() {
    let inp = inputs(dec!(650_000), dec!(10), dec!(6.5), 30);
    let out = quote::quote(&inp);
    assert_eq!(out.assumptions["home_price"], "650000");
    assert_eq!(out.assumptions["term_years"], 30);
    assert!(out.methodology.contains("annuity"));
}

// ===========================================================================
// Session behavior: the widget flow a user actually drives
// ===========================================================================

#[test]
fn test_user_flow_term_then_rate_then_term() {
    let mut session = CalculatorSession::default();

    // Switching terms keeps pulling survey defaults...
    session.set_term(LoanTerm::Years15);
    assert_eq!(session.inputs().annual_rate_percent, dec!(5.875));

    // ...until the user types a rate of their own...
    session.set_rate(dec!(6.25));
    session.set_term(LoanTerm::Years30);

    // ...which then sticks across any further term changes.
    assert_eq!(session.inputs().annual_rate_percent, dec!(6.25));
    assert_eq!(session.inputs().term_years, 30);
}

#[test]
fn test_session_quote_matches_direct_computation() {
    let session = CalculatorSession::default();
    let direct = quote::compute_payment(session.inputs());
    assert_eq!(session.derived(), direct);
}

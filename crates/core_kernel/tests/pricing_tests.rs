//! Unit tests for the pricing calculator
//!
//! Covers the reference vectors, the zero-margin identity, the rounding
//! policy, and the guarded zero/negative term.

use core_kernel::pricing::{calculate, PricingError};
use proptest::prelude::*;

mod reference_vectors {
    use super::*;

    #[test]
    fn twelve_month_auto_loan_at_ten_percent() {
        let quote = calculate(12_000, 2_000, 12, 10.0).unwrap();
        assert_eq!(quote.net_price, 10_000);
        // margin = round(10000 * 0.10 * 1.0) = 1000
        assert_eq!(quote.total_amount, 11_000);
        // monthly = round(11000 / 12) = 917
        assert_eq!(quote.monthly_payment, 917);
    }

    #[test]
    fn twenty_four_month_term_scales_margin_by_years() {
        let quote = calculate(12_000, 2_000, 24, 10.0).unwrap();
        // margin = round(10000 * 0.10 * 2.0) = 2000
        assert_eq!(quote.total_amount, 12_000);
        assert_eq!(quote.monthly_payment, 500);
    }

    #[test]
    fn fractional_margin_rounds_half_up() {
        // net = 1001, margin = round(1001 * 0.05 * 0.5) = round(25.025) = 25
        let quote = calculate(1_001, 0, 6, 5.0).unwrap();
        assert_eq!(quote.total_amount, 1_026);
        // monthly = round(1026 / 6) = 171
        assert_eq!(quote.monthly_payment, 171);
    }
}

mod invalid_term {
    use super::*;

    #[test]
    fn zero_term_is_rejected() {
        assert_eq!(calculate(12_000, 2_000, 0, 10.0), Err(PricingError::InvalidTerm(0)));
    }

    #[test]
    fn negative_term_is_rejected() {
        assert_eq!(calculate(12_000, 2_000, -6, 10.0), Err(PricingError::InvalidTerm(-6)));
    }
}

proptest! {
    #[test]
    fn zero_margin_total_equals_net(
        price in 0i64..1_000_000_000,
        down in 0i64..1_000_000,
        term in 1i32..=120,
    ) {
        prop_assume!(price >= down);
        let quote = calculate(price, down, term, 0.0).unwrap();
        prop_assert_eq!(quote.net_price, price - down);
        prop_assert_eq!(quote.total_amount, quote.net_price);
        // monthly = round(net / term), half away from zero
        let expected = (quote.net_price as f64 / f64::from(term) + 0.5) as i64;
        prop_assert_eq!(quote.monthly_payment, expected);
    }

    #[test]
    fn total_is_never_below_net_for_positive_margin(
        price in 0i64..1_000_000_000,
        down in 0i64..1_000_000,
        term in 1i32..=120,
        rate in 0.0f64..40.0,
    ) {
        prop_assume!(price >= down);
        let quote = calculate(price, down, term, rate).unwrap();
        prop_assert!(quote.total_amount >= quote.net_price);
    }
}

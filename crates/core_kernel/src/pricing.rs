//! Loan pricing arithmetic
//!
//! All monetary inputs and outputs are integer minor units (e.g. cents).
//! The margin is the lender's markup over the net price, applied per the
//! term length in years, and the monthly payment is derived from the total
//! amount spread evenly over the term.

use serde::Serialize;
use thiserror::Error;

/// Errors from the pricing calculation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The term must be at least one month
    #[error("term must be a positive number of months, got {0}")]
    InvalidTerm(i32),
}

/// Result of a pricing calculation, in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Price minus down payment
    pub net_price: i64,
    /// Total amount divided over the term, rounded half away from zero
    pub monthly_payment: i64,
    /// Net price plus margin
    pub total_amount: i64,
}

/// Computes net price, monthly payment, and total amount for a loan.
///
/// ```
/// use core_kernel::pricing::calculate;
///
/// let quote = calculate(12_000, 2_000, 12, 10.0).unwrap();
/// assert_eq!(quote.net_price, 10_000);
/// assert_eq!(quote.total_amount, 11_000);
/// assert_eq!(quote.monthly_payment, 917);
/// ```
///
/// Negative prices or down payments are not validated; they flow through
/// the formula and are the caller's responsibility.
///
/// # Errors
///
/// Returns [`PricingError::InvalidTerm`] when `term_months` is zero or
/// negative, which would otherwise divide by zero.
pub fn calculate(
    price: i64,
    down_payment: i64,
    term_months: i32,
    margin_rate: f64,
) -> Result<Quote, PricingError> {
    if term_months <= 0 {
        return Err(PricingError::InvalidTerm(term_months));
    }

    let net = price - down_payment;
    let years = f64::from(term_months) / 12.0;
    let margin = round_half_away(net as f64 * margin_rate / 100.0 * years);
    let total = net + margin;
    let monthly = round_half_away(total as f64 / f64::from(term_months));

    Ok(Quote {
        net_price: net,
        monthly_payment: monthly,
        total_amount: total,
    })
}

/// Rounds half away from zero: add 0.5 toward the value's sign, then
/// truncate toward zero.
fn round_half_away(value: f64) -> i64 {
    if value >= 0.0 {
        (value + 0.5) as i64
    } else {
        (value - 0.5) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_for_positive_values() {
        assert_eq!(round_half_away(2.5), 3);
        assert_eq!(round_half_away(2.4), 2);
    }

    #[test]
    fn rounds_half_down_for_negative_values() {
        assert_eq!(round_half_away(-2.5), -3);
        assert_eq!(round_half_away(-2.4), -2);
    }
}

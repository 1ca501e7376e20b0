//! Monthly installment calculation
//!
//! Interest compounds monthly on the full principal for the whole term, and
//! the compounded total is split evenly across the months. This is not a
//! reducing-balance amortization; outputs must match the storefront's
//! published figures, so the formula is kept as is.

use super::InstallmentQuote;

/// Default annual interest rate (10%)
pub const DEFAULT_ANNUAL_RATE: f64 = 0.10;

/// Round to 2 decimal places, ties away from zero.
///
/// The tie rule applies to the binary `f64` product `value * 100.0`, not to
/// the decimal literal: `1.005 * 100.0` is `100.49999999999999`, so
/// `round_to_cents(1.005)` is `1.0`. Only ties exactly representable in
/// binary (such as `1.125`) round away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Quote a financing plan for `price` over `months` at `annual_rate`.
///
/// A non-positive `months` yields an all-zero quote rather than an error.
/// No other input is validated: a negative price flows through the formula.
///
/// # Arguments
/// * `price` - Amount financed
/// * `months` - Term length; any positive value is accepted, offered or not
/// * `annual_rate` - Annual rate as a fraction (0.10 = 10%)
pub fn compute_installment(price: f64, months: i32, annual_rate: f64) -> InstallmentQuote {
    if months <= 0 {
        return InstallmentQuote::zero(price, months, annual_rate);
    }

    let monthly_rate = annual_rate / 12.0;
    let total = price * (1.0 + monthly_rate).powi(months);
    let monthly = total / months as f64;

    let total_payable = round_to_cents(total);

    InstallmentQuote {
        principal: price,
        term_months: months,
        annual_rate,
        monthly_payment: round_to_cents(monthly),
        total_payable,
        total_interest: round_to_cents(total_payable - price),
    }
}

/// Quote at [`DEFAULT_ANNUAL_RATE`]
pub fn compute_installment_default(price: f64, months: i32) -> InstallmentQuote {
    compute_installment(price, months, DEFAULT_ANNUAL_RATE)
}

//! Quote value type

use serde::{Deserialize, Serialize};

/// Result of quoting one (price, term, rate) combination.
///
/// Computed fresh on every call and never mutated. Persisting a chosen plan
/// is up to the checkout side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentQuote {
    /// Amount financed, as passed to the calculator
    pub principal: f64,

    /// Requested term in months
    pub term_months: i32,

    /// Annual rate as a fraction (0.10 = 10%)
    pub annual_rate: f64,

    /// Payment due each month, rounded to cents
    #[serde(rename = "monthly")]
    pub monthly_payment: f64,

    /// Principal plus accrued interest, rounded to cents
    #[serde(rename = "total")]
    pub total_payable: f64,

    /// `total_payable - principal`, rounded to cents
    #[serde(rename = "interest")]
    pub total_interest: f64,
}

impl InstallmentQuote {
    /// Quote returned for a non-positive term
    pub fn zero(principal: f64, term_months: i32, annual_rate: f64) -> Self {
        Self {
            principal,
            term_months,
            annual_rate,
            monthly_payment: 0.0,
            total_payable: 0.0,
            total_interest: 0.0,
        }
    }

    /// True when the quote carries no payments (degenerate term)
    pub fn is_zero(&self) -> bool {
        self.monthly_payment == 0.0 && self.total_payable == 0.0 && self.total_interest == 0.0
    }

    /// Quote with the lowest monthly payment, skipping non-positive terms.
    /// Ties keep the earliest quote.
    pub fn lowest_monthly(quotes: &[InstallmentQuote]) -> Option<&InstallmentQuote> {
        quotes
            .iter()
            .filter(|q| q.term_months > 0)
            .min_by(|a, b| a.monthly_payment.total_cmp(&b.monthly_payment))
    }
}

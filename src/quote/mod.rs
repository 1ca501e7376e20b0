//! Installment calculator and quote values

mod calculator;
mod types;

pub use calculator::{
    compute_installment, compute_installment_default, round_to_cents, DEFAULT_ANNUAL_RATE,
};
pub use types::InstallmentQuote;

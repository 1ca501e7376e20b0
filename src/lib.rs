//! EV Installments - Financing plan quotes for an e-vehicle showroom
//!
//! This library provides:
//! - The monthly installment calculator (compounded total split evenly over the term)
//! - Offered term lists and JSON quote configuration
//! - Vehicle price list loading and parallel catalog quoting
//! - CSV export of quote tables

pub mod error;
pub mod quote;
pub mod offering;
pub mod config;
pub mod catalog;
pub mod plan;

// Re-export commonly used types
pub use error::{QuoteError, Result};
pub use quote::{compute_installment, compute_installment_default, InstallmentQuote, DEFAULT_ANNUAL_RATE};
pub use offering::{TermOffering, DEFAULT_TERMS};
pub use config::QuoteConfig;
pub use catalog::{Vehicle, VehicleQuotes};
pub use plan::QuoteRunner;

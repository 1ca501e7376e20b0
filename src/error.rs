//! Error types for configuration and catalog handling
//!
//! The calculator itself never fails; these errors come from loading and
//! validating the inputs around it.

use thiserror::Error;

/// Errors raised while building term offerings, reading configuration or
/// loading a vehicle catalog.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A term offering must list at least one term.
    #[error("Term offering is empty")]
    EmptyOffering,

    /// Offered terms must be positive month counts.
    #[error("Invalid term: {months} months")]
    InvalidTerm { months: i32 },

    /// Offered terms must be strictly ascending.
    #[error("Terms not strictly ascending: {previous} followed by {next}")]
    UnorderedTerms { previous: i32, next: i32 },

    /// Annual rate must be non-negative.
    #[error("Invalid annual rate: {rate}")]
    InvalidRate { rate: f64 },

    /// Catalog price that is negative or not finite.
    #[error("Vehicle {vehicle_id} has invalid price {price}")]
    InvalidPrice { vehicle_id: u32, price: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;

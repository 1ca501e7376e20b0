//! Catalog data structures

use serde::{Deserialize, Serialize};

use crate::quote::InstallmentQuote;

/// A vehicle on the showroom price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: u32,
    pub model: String,
    pub price: f64,
}

impl Vehicle {
    pub fn new(vehicle_id: u32, model: impl Into<String>, price: f64) -> Self {
        Self {
            vehicle_id,
            model: model.into(),
            price,
        }
    }
}

/// All offered-term quotes for one vehicle
#[derive(Debug, Clone, Serialize)]
pub struct VehicleQuotes {
    pub vehicle: Vehicle,
    pub quotes: Vec<InstallmentQuote>,
}

impl VehicleQuotes {
    /// Quote with the lowest monthly payment, if any
    pub fn lowest_monthly(&self) -> Option<&InstallmentQuote> {
        InstallmentQuote::lowest_monthly(&self.quotes)
    }
}

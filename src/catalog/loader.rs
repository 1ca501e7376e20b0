//! Load vehicles from a price list CSV and write quote tables

use super::{Vehicle, VehicleQuotes};
use crate::error::{QuoteError, Result};
use csv::{Reader, Writer};
use std::io::{Read, Write};
use std::path::Path;

/// Raw CSV row matching the price list columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "VehicleID")]
    vehicle_id: u32,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Price")]
    price: f64,
}

impl CsvRow {
    fn to_vehicle(self) -> Result<Vehicle> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(QuoteError::InvalidPrice {
                vehicle_id: self.vehicle_id,
                price: self.price,
            });
        }

        Ok(Vehicle {
            vehicle_id: self.vehicle_id,
            model: self.model.trim().to_string(),
            price: self.price,
        })
    }
}

/// One output row per (vehicle, term)
#[derive(Debug, serde::Serialize)]
struct QuoteRow<'a> {
    #[serde(rename = "VehicleID")]
    vehicle_id: u32,
    #[serde(rename = "Model")]
    model: &'a str,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "TermMonths")]
    term_months: i32,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "Monthly")]
    monthly: f64,
    #[serde(rename = "Total")]
    total: f64,
    #[serde(rename = "Interest")]
    interest: f64,
}

/// Load all vehicles from a CSV file
pub fn load_vehicles<P: AsRef<Path>>(path: P) -> Result<Vec<Vehicle>> {
    let file = std::fs::File::open(path)?;
    load_vehicles_from_reader(file)
}

/// Load vehicles from any reader (e.g., string buffer, network stream)
pub fn load_vehicles_from_reader<R: Read>(reader: R) -> Result<Vec<Vehicle>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut vehicles = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        vehicles.push(row.to_vehicle()?);
    }

    log::debug!("Loaded {} vehicles", vehicles.len());
    Ok(vehicles)
}

/// Write quotes as CSV, one row per vehicle and term
pub fn write_quotes_csv<W: Write>(writer: W, results: &[VehicleQuotes]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    for entry in results {
        for quote in &entry.quotes {
            csv_writer.serialize(QuoteRow {
                vehicle_id: entry.vehicle.vehicle_id,
                model: &entry.vehicle.model,
                price: entry.vehicle.price,
                term_months: quote.term_months,
                annual_rate: quote.annual_rate,
                monthly: quote.monthly_payment,
                total: quote.total_payable,
                interest: quote.total_interest,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

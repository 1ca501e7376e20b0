//! Quote every vehicle in a price list against every offered term
//!
//! Usage: quote_catalog [vehicles.csv] [catalog_quotes.csv]

use anyhow::Context;
use ev_installments::catalog::{load_vehicles, write_quotes_csv};
use ev_installments::{QuoteConfig, QuoteRunner};
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| "vehicles.csv".to_string());
    let output_path = args.next().unwrap_or_else(|| "catalog_quotes.csv".to_string());

    let start = Instant::now();
    println!("Loading vehicles from {}...", input_path);

    let vehicles = load_vehicles(&input_path)
        .with_context(|| format!("Failed to load vehicles from {}", input_path))?;
    println!("Loaded {} vehicles in {:?}", vehicles.len(), start.elapsed());

    let runner = QuoteRunner::with_config(QuoteConfig::load_default()?);

    println!("Quoting {} terms per vehicle...", runner.config().terms.len());
    let quote_start = Instant::now();
    let results = runner.quote_batch(&vehicles);
    println!("Quotes complete in {:?}", quote_start.elapsed());

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    write_quotes_csv(BufWriter::new(file), &results)?;

    println!("\nResults written to: {}", output_path);

    let cheapest = results
        .iter()
        .filter_map(|r| r.lowest_monthly().map(|q| (r, q)))
        .min_by(|a, b| a.1.monthly_payment.total_cmp(&b.1.monthly_payment));
    if let Some((entry, quote)) = cheapest {
        println!("Lowest monthly payment: {} ({} months) ${:.2}",
            entry.vehicle.model, quote.term_months, quote.monthly_payment);
    }

    println!("Total time: {:?}", start.elapsed());
    Ok(())
}

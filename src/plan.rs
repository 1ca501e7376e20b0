//! Quote runner for offered terms and catalog batches
//!
//! Holds one configuration and applies it to single prices, to every offered
//! term, or to a whole price list.

use rayon::prelude::*;

use crate::catalog::{Vehicle, VehicleQuotes};
use crate::config::QuoteConfig;
use crate::quote::{compute_installment, InstallmentQuote};

/// Quote runner bound to a rate and term offering
///
/// # Example
/// ```
/// use ev_installments::QuoteRunner;
///
/// let runner = QuoteRunner::new();
/// for quote in runner.quote_offered(1000.0) {
///     println!("{} months: {:.2}/month", quote.term_months, quote.monthly_payment);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteRunner {
    config: QuoteConfig,
}

impl QuoteRunner {
    /// Runner with showroom defaults
    pub fn new() -> Self {
        Self {
            config: QuoteConfig::default_showroom(),
        }
    }

    pub fn with_config(config: QuoteConfig) -> Self {
        Self { config }
    }

    /// Quote any term at the configured rate
    pub fn quote(&self, price: f64, months: i32) -> InstallmentQuote {
        compute_installment(price, months, self.config.annual_rate)
    }

    /// One quote per offered term, in offering order
    pub fn quote_offered(&self, price: f64) -> Vec<InstallmentQuote> {
        self.config
            .terms
            .iter()
            .map(|months| self.quote(price, months))
            .collect()
    }

    /// Offered quote with the lowest monthly payment
    pub fn cheapest_monthly(&self, price: f64) -> Option<InstallmentQuote> {
        InstallmentQuote::lowest_monthly(&self.quote_offered(price)).copied()
    }

    /// Quote every vehicle against every offered term in parallel.
    /// Output order matches input order.
    pub fn quote_batch(&self, vehicles: &[Vehicle]) -> Vec<VehicleQuotes> {
        vehicles
            .par_iter()
            .map(|vehicle| VehicleQuotes {
                vehicle: vehicle.clone(),
                quotes: self.quote_offered(vehicle.price),
            })
            .collect()
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut QuoteConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offering::TermOffering;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quote_offered_follows_offering() {
        let runner = QuoteRunner::new();
        let quotes = runner.quote_offered(1000.0);

        let terms: Vec<i32> = quotes.iter().map(|q| q.term_months).collect();
        assert_eq!(terms, vec![3, 6, 12, 18, 24]);
        assert_abs_diff_eq!(quotes[2].monthly_payment, 92.06, epsilon = 1e-9);

        // Longer terms accrue more interest
        for pair in quotes.windows(2) {
            assert!(pair[1].total_payable > pair[0].total_payable);
        }
    }

    #[test]
    fn test_custom_config() {
        let config = QuoteConfig {
            annual_rate: 0.0,
            terms: TermOffering::new(vec![6, 12]).unwrap(),
        };
        let runner = QuoteRunner::with_config(config);

        let quotes = runner.quote_offered(300.0);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].monthly_payment, 50.0);
        assert_eq!(quotes[1].monthly_payment, 25.0);
        assert_eq!(quotes[1].total_interest, 0.0);
    }

    #[test]
    fn test_cheapest_monthly_is_longest_term() {
        let runner = QuoteRunner::new();
        let cheapest = runner.cheapest_monthly(45_000.0).unwrap();
        assert_eq!(cheapest.term_months, 24);
    }

    #[test]
    fn test_cheapest_monthly_matches_catalog_selection() {
        let runner = QuoteRunner::new();
        let vehicle = Vehicle::new(1, "City Scooter", 1000.0);
        let batch = runner.quote_batch(std::slice::from_ref(&vehicle));

        assert_eq!(
            runner.cheapest_monthly(vehicle.price).as_ref(),
            batch[0].lowest_monthly()
        );

        // Free vehicle: every quote is zero, the first offered term wins
        assert_eq!(runner.cheapest_monthly(0.0).unwrap().term_months, 3);
    }

    #[test]
    fn test_batch_preserves_order() {
        let vehicles: Vec<Vehicle> = (1..=200)
            .map(|i| Vehicle::new(i, format!("Model {}", i), 1000.0 * i as f64))
            .collect();

        let runner = QuoteRunner::new();
        let results = runner.quote_batch(&vehicles);

        assert_eq!(results.len(), vehicles.len());
        for (result, vehicle) in results.iter().zip(&vehicles) {
            assert_eq!(result.vehicle.vehicle_id, vehicle.vehicle_id);
            assert_eq!(result.quotes, runner.quote_offered(vehicle.price));
            assert_eq!(result.lowest_monthly().unwrap().term_months, 24);
        }
    }

    #[test]
    fn test_config_mut_changes_rate() {
        let mut runner = QuoteRunner::new();
        runner.config_mut().annual_rate = 0.0;
        assert_eq!(runner.quote(1200.0, 12).monthly_payment, 100.0);
        assert_eq!(runner.config().annual_rate, 0.0);
    }
}

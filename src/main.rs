//! EV Installments CLI
//!
//! Quotes a financing plan for one price, either for a single term or for
//! every offered term.

use anyhow::Context;
use clap::Parser;
use ev_installments::{QuoteConfig, QuoteRunner};

/// Quote monthly installments for a vehicle price
#[derive(Parser)]
#[command(name = "ev_installments")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Vehicle price to finance (negative values pass through unchecked)
    #[arg(short, long, allow_negative_numbers = true)]
    price: f64,

    /// Term in months (default: every offered term)
    #[arg(short, long, allow_negative_numbers = true)]
    months: Option<i32>,

    /// Annual rate as a fraction, overriding the config (e.g. 0.10)
    #[arg(short, long)]
    rate: Option<f64>,

    /// Quote configuration file (JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => QuoteConfig::from_json_path(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => QuoteConfig::load_default()?,
    };
    if let Some(rate) = cli.rate {
        config = config.with_annual_rate(rate)?;
    }

    let runner = QuoteRunner::with_config(config);

    let quotes = match cli.months {
        Some(months) => {
            if !runner.config().terms.contains(months) {
                log::warn!("{} months is not an offered term", months);
            }
            vec![runner.quote(cli.price, months)]
        }
        None => runner.quote_offered(cli.price),
    };

    if cli.json {
        let json = if quotes.len() == 1 {
            serde_json::to_string_pretty(&quotes[0])?
        } else {
            serde_json::to_string_pretty(&quotes)?
        };
        println!("{}", json);
        return Ok(());
    }

    println!("Price: ${:.2}  Annual rate: {:.2}%", cli.price, runner.config().annual_rate * 100.0);
    println!("{:>6} {:>14} {:>14} {:>14}", "Months", "Monthly", "Total", "Interest");
    println!("{}", "-".repeat(51));

    for quote in &quotes {
        println!("{:>6} {:>14.2} {:>14.2} {:>14.2}",
            quote.term_months,
            quote.monthly_payment,
            quote.total_payable,
            quote.total_interest,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_price_parses() {
        let cli = Cli::try_parse_from(["ev_installments", "--price", "-1000", "--months", "12"]).unwrap();
        assert_eq!(cli.price, -1000.0);
        assert_eq!(cli.months, Some(12));

        let quote = QuoteRunner::new().quote(cli.price, 12);
        assert_eq!(quote.total_payable, -1104.71);
    }

    #[test]
    fn test_negative_months_parses() {
        let cli = Cli::try_parse_from(["ev_installments", "-p", "500", "-m", "-3", "--json"]).unwrap();
        assert_eq!(cli.months, Some(-3));
        assert!(cli.json);
        assert!(QuoteRunner::new().quote(cli.price, -3).is_zero());
    }
}

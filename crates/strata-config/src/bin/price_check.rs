//! # Price Check
//!
//! Quotes a price from the command line using the configured discount rules.
//!
//! ## Usage
//! ```bash
//! # Quote 50 units at $100 with every rule applied cumulatively
//! cargo run -p strata-config --bin price_check -- --price 100 --qty 50
//!
//! # Pick the single strongest discount instead of chaining
//! cargo run -p strata-config --bin price_check -- --price 100 --qty 50 --policy HIGHEST
//!
//! # Quantity tiers only, from an explicit config file
//! cargo run -p strata-config --bin price_check -- \
//!     --price 9.99 --qty 20 --kind QUANTITY --config ./pricing.toml
//! ```
//!
//! ## Selectors
//! Selectors are the exact case-sensitive strings a host would send:
//! kinds are `QUANTITY`, `PERCENTAGE`, `BOTH` and policies are
//! `CUMULATIVE`, `HIGHEST`.

use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;
use std::process::exit;
use strata_config::PricingSettings;
use strata_core::Money;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Surface settings-layer warnings on the terminal, keep routine info quiet
    FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut price: Option<Decimal> = None;
    let mut quantity: Option<i64> = None;
    let mut kind = String::from("BOTH");
    let mut policy = String::from("CUMULATIVE");
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--price" | "-p" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<Decimal>() {
                        Ok(value) => price = Some(value),
                        Err(_) => {
                            eprintln!("Invalid --price value: {}", args[i + 1]);
                            exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--qty" | "-q" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<i64>() {
                        Ok(value) => quantity = Some(value),
                        Err(_) => {
                            eprintln!("Invalid --qty value: {}", args[i + 1]);
                            exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--kind" | "-k" => {
                if i + 1 < args.len() {
                    kind = args[i + 1].clone();
                    i += 1;
                }
            }
            "--policy" => {
                if i + 1 < args.len() {
                    policy = args[i + 1].clone();
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Strata Price Check");
                println!();
                println!("Usage: price_check --price <AMOUNT> --qty <N> [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --price <AMOUNT>   Unit price, e.g. 9.99");
                println!("  -q, --qty <N>          Number of units");
                println!("  -k, --kind <KIND>      QUANTITY | PERCENTAGE | BOTH (default: BOTH)");
                println!("      --policy <POLICY>  CUMULATIVE | HIGHEST (default: CUMULATIVE)");
                println!("  -c, --config <PATH>    Pricing config file (default: platform config dir)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let (price, quantity) = match (price, quantity) {
        (Some(price), Some(quantity)) => (price, quantity),
        _ => {
            eprintln!("Both --price and --qty are required. See --help.");
            exit(1);
        }
    };
    let unit_price = Money::new(price);

    println!("Strata Price Check");
    println!("==================");

    let settings = PricingSettings::load(config_path)?;
    let calculator = settings.into_calculator()?;
    println!("✓ Loaded {} pricing rule(s)", calculator.registry().len());
    println!();

    let total = calculator.calculate_for(unit_price, quantity, &kind, &policy)?;
    let original = unit_price.multiply_quantity(quantity);

    println!("Unit price:     {unit_price}");
    println!("Quantity:       {quantity}");
    println!("Strategy:       {kind}/{policy}");
    println!();
    println!("Original total: {original}");
    println!("Final price:    {total}");

    if total != original {
        println!("You saved:      {}", original - total);
    }

    Ok(())
}

//! # strata-config: Configuration Layer for Strata
//!
//! This crate turns a `pricing.toml` file into a validated, ready-to-share
//! [`PriceCalculator`](strata_core::PriceCalculator). All file system and
//! environment access for the pricing engine lives here, keeping
//! `strata-core` pure.
//!
//! ## Startup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Startup Flow                                │
//! │                                                                         │
//! │   explicit path ─┐                                                      │
//! │   STRATA_CONFIG ─┼──► PricingSettings::load                             │
//! │   default path ──┘           │                                          │
//! │                              ▼                                          │
//! │                     apply_env_overrides                                 │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                     validate (fail fast) ──► ConfigError (fatal)        │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                     into_calculator ──► PriceCalculator                 │
//! │                                                                         │
//! │   The calculator is immutable after startup: share it freely,           │
//! │   configuration never changes mid-flight.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Configuration error types
//! - [`settings`] - TOML settings, environment overrides, calculator wiring
//!
//! ## Usage
//!
//! ```rust,no_run
//! use strata_config::PricingSettings;
//! use strata_core::Money;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load pricing.toml (explicit path, STRATA_CONFIG, or platform default)
//! let settings = PricingSettings::load(None)?;
//! let calculator = settings.into_calculator()?;
//!
//! // Quote 50 units at $100 with every rule applied cumulatively
//! let total = calculator.calculate_for(Money::from_major(100), 50, "BOTH", "CUMULATIVE")?;
//! println!("Final price: {total}");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod settings;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConfigResult};
pub use settings::{DiscountSettings, PricingSettings, TierSettings};

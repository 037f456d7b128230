//! # Pricing Settings
//!
//! Loads discount configuration and wires it into a validated calculator.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Configuration Priority                             │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     STRATA_DISCOUNT_PERCENTAGE=0.15                                     │
//! │     STRATA_CONFIG=/etc/strata/pricing.toml  (file location)             │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     ~/.config/pricing/pricing.toml (Linux)                              │
//! │     ~/Library/Application Support/com.strata.pricing/pricing.toml (mac) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     No discount rules: every order prices at the original total         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pricing.toml
//! # All rates are fractions of one: 0.10 means 10% off.
//! [discount]
//! percentage = 0.10
//!
//! [[discount.tiers]]
//! min_quantity = 10
//! rate = 0.05
//!
//! [[discount.tiers]]
//! min_quantity = 20
//! rate = 0.10
//!
//! [[discount.tiers]]
//! min_quantity = 50
//! rate = 0.15
//! ```
//!
//! Tiers must be listed with strictly increasing `min_quantity`. Violations
//! are rejected at load time, before the first price is ever computed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use strata_core::{
    ConfigViolation, DiscountRule, PercentageRule, PriceCalculator, QuantityTieredRule, Rate,
    RuleRegistry, Tier,
};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Tier Settings
// =============================================================================

/// A single quantity tier as written in configuration.
///
/// Raw values only: range and ordering checks happen when the tier is
/// handed to `strata-core`, so every constraint lives in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierSettings {
    /// Minimum quantity at which this tier's rate starts applying.
    pub min_quantity: i64,

    /// Discount rate for the tier, as a fraction of one in [0, 1].
    pub rate: Decimal,
}

// =============================================================================
// Discount Settings
// =============================================================================

/// Discount rules as written in configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscountSettings {
    /// Flat percentage applied to every order, as a fraction of one.
    /// Absent means no flat discount is configured.
    #[serde(default)]
    pub percentage: Option<Decimal>,

    /// Quantity tiers with strictly increasing `min_quantity`.
    /// Empty means no volume discount is configured.
    #[serde(default)]
    pub tiers: Vec<TierSettings>,
}

// =============================================================================
// Main Pricing Settings
// =============================================================================

/// Complete pricing configuration.
///
/// ## Example Config File
/// ```toml
/// [discount]
/// percentage = 0.10
///
/// [[discount.tiers]]
/// min_quantity = 10
/// rate = 0.05
///
/// [[discount.tiers]]
/// min_quantity = 50
/// rate = 0.15
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Discount rule settings.
    #[serde(default)]
    pub discount: DiscountSettings,
}

impl PricingSettings {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values (no discount rules)
    /// 2. Config file (pricing.toml)
    /// 3. Environment variables
    ///
    /// A path named explicitly (argument or `STRATA_CONFIG`) must exist and
    /// parse, so a typo cannot silently run the engine without its rules.
    /// The platform default path is optional: when nothing is there the
    /// engine starts with no rules and prices every order at the original
    /// total.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut settings = if let Some(path) = config_path.or_else(Self::env_config_path) {
            info!(?path, "Loading pricing config from file");
            Self::read_file(&path)?
        } else if let Some(path) = Self::default_config_path().filter(|path| path.exists()) {
            info!(?path, "Loading pricing config from default location");
            Self::read_file(&path)?
        } else {
            debug!("No pricing config file found, using defaults");
            Self::default()
        };

        // Override with environment variables
        settings.apply_env_overrides();

        // Validate before anything downstream can see the settings
        settings.validate()?;

        Ok(settings)
    }

    /// Validates the configuration without building a calculator.
    pub fn validate(&self) -> ConfigResult<()> {
        self.build_rules()?;
        Ok(())
    }

    /// Builds validated discount rules in evaluation order.
    ///
    /// The tiered rule is registered before the flat percentage, so
    /// cumulative pricing applies the volume discount first.
    pub fn build_rules(&self) -> Result<Vec<DiscountRule>, ConfigViolation> {
        let mut rules = Vec::new();

        if !self.discount.tiers.is_empty() {
            let tiers = self
                .discount
                .tiers
                .iter()
                .map(|tier| Ok(Tier::new(tier.min_quantity, Rate::new(tier.rate)?)))
                .collect::<Result<Vec<_>, ConfigViolation>>()?;
            rules.push(DiscountRule::QuantityTiered(QuantityTieredRule::new(
                tiers,
            )?));
        }

        if let Some(percentage) = self.discount.percentage {
            rules.push(DiscountRule::Percentage(PercentageRule::new(Rate::new(
                percentage,
            )?)));
        }

        Ok(rules)
    }

    /// Consumes the settings and wires a ready-to-use calculator.
    pub fn into_calculator(self) -> ConfigResult<PriceCalculator> {
        let tier_count = self.discount.tiers.len();
        let registry = RuleRegistry::new(self.build_rules()?);
        info!(
            rule_count = registry.len(),
            tier_count, "Pricing engine configured"
        );
        Ok(PriceCalculator::new(registry))
    }

    /// Reads and parses a TOML settings file.
    fn read_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // Flat percentage
        if let Ok(raw) = std::env::var("STRATA_DISCOUNT_PERCENTAGE") {
            match raw.parse::<Decimal>() {
                Ok(value) => {
                    debug!(percentage = %value, "Overriding flat percentage from environment");
                    self.discount.percentage = Some(value);
                }
                Err(_) => warn!(value = %raw, "Ignoring unparseable STRATA_DISCOUNT_PERCENTAGE"),
            }
        }
    }

    /// Returns the config path named in the environment, if any.
    fn env_config_path() -> Option<PathBuf> {
        std::env::var_os("STRATA_CONFIG").map(PathBuf::from)
    }

    /// Returns the platform default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "strata", "pricing")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }
}

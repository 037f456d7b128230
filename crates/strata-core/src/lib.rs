//! # strata-core: Pure Pricing Logic for Strata
//!
//! This crate is the **heart** of Strata. It contains the whole discount
//! engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Strata Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Host Application                           │   │
//! │  │     checkout flow ──► quote endpoint ──► receipt totals         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                strata-config (Startup Layer)                    │   │
//! │  │     pricing.toml ──► validated rules ──► PriceCalculator        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ strata-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ discount  │  │ registry  │  │calculator │  │   │
//! │  │   │   Money   │  │ tiered    │  │  ordered  │  │  policy   │  │   │
//! │  │   │   Rate    │  │   flat    │  │ selection │  │  combine  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBAL STATE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Final price computation under a combination policy
//! - [`discount`] - Percentage and quantity-tiered discount rules
//! - [`error`] - Domain error types
//! - [`money`] - Exact decimal Money and Rate types (no floating point!)
//! - [`registry`] - Ordered rule registry and kind-based selection
//! - [`strategy`] - Discount kind and combination policy selectors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Identical inputs always price to the identical total
//! 2. **No I/O**: Configuration loading lives in `strata-config`, never here
//! 3. **Exact Decimals**: All money math goes through `rust_decimal` - floats are FORBIDDEN
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use strata_core::{
//!     DiscountRule, Money, PercentageRule, PriceCalculator, QuantityTieredRule, Rate,
//!     RuleRegistry, Tier,
//! };
//!
//! // Rates are validated at construction (never built from floats!)
//! let tiered = QuantityTieredRule::new(vec![
//!     Tier::new(10, Rate::new(Decimal::new(5, 2))?),  // 10+ units → 5%
//!     Tier::new(50, Rate::new(Decimal::new(15, 2))?), // 50+ units → 15%
//! ])?;
//! let flat = PercentageRule::new(Rate::new(Decimal::new(10, 2))?);
//!
//! let calculator = PriceCalculator::new(RuleRegistry::new(vec![
//!     DiscountRule::QuantityTiered(tiered),
//!     DiscountRule::Percentage(flat),
//! ]));
//!
//! // 50 × $100 = $5000 → tier 15% → $4250 → flat 10% → $3825
//! let total = calculator.calculate_for(Money::from_major(100), 50, "BOTH", "CUMULATIVE")?;
//! assert_eq!(total, Money::from_major(3825));
//! # Ok::<(), strata_core::PricingError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod discount;
pub mod error;
pub mod money;
pub mod registry;
pub mod strategy;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use strata_core::Money` instead of
// `use strata_core::money::Money`

pub use calculator::PriceCalculator;
pub use discount::{DiscountRule, PercentageRule, QuantityTieredRule, Tier};
pub use error::{ConfigViolation, PricingError, PricingResult};
pub use money::{Money, Rate};
pub use registry::RuleRegistry;
pub use strategy::{CombinationPolicy, DiscountKind, DiscountStrategy};

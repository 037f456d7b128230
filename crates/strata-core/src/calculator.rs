//! # Price Calculator
//!
//! Orchestrates rule selection and combination into a final price.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Price Calculation Flow                            │
//! │                                                                         │
//! │  (unit price, quantity, "BOTH", "CUMULATIVE")                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  DiscountStrategy::parse ── exact-match selectors ──► InvalidStrategy   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  original total = unit price × quantity   (quantity < 0 → error)        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  registry.select(kind) ──► [tiered, flat]   (configuration order)       │
//! │         │                                                               │
//! │         ├── CUMULATIVE: fold, each rule prices the previous output      │
//! │         └── HIGHEST:    price the original per rule, keep the minimum   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  final price                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::registry::RuleRegistry;
use crate::strategy::{CombinationPolicy, DiscountStrategy};

// =============================================================================
// Price Calculator
// =============================================================================

/// Prices a quantity of units under a requested discount strategy.
///
/// Stateless per call: the only data behind a calculator is the immutable,
/// startup-validated [`RuleRegistry`], so one instance may serve concurrent
/// callers without locking.
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    registry: RuleRegistry,
}

impl PriceCalculator {
    /// Creates a calculator over a configured registry.
    pub fn new(registry: RuleRegistry) -> Self {
        PriceCalculator { registry }
    }

    /// Returns the registry backing this calculator.
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Computes the final price for `quantity` units at `unit_price`.
    ///
    /// ## Algorithm
    /// 1. Reject negative quantities with `InvalidQuantity`.
    /// 2. `original = unit_price × quantity`.
    /// 3. Select the rules matching `strategy.kind`.
    /// 4. Combine per `strategy.policy`:
    ///    - `Cumulative` folds the selection left to right over the
    ///      original total, each rule pricing the previous rule's output.
    ///    - `Highest` prices the original total under every rule
    ///      independently and keeps the minimum result.
    ///
    /// An empty selection returns the original total unchanged under
    /// either policy. Nothing is clamped: validated rates in [0, 1] cannot
    /// turn a non-negative total negative.
    pub fn calculate(
        &self,
        unit_price: Money,
        quantity: i64,
        strategy: &DiscountStrategy,
    ) -> PricingResult<Money> {
        if quantity < 0 {
            return Err(PricingError::InvalidQuantity { quantity });
        }

        let original = unit_price.multiply_quantity(quantity);
        let selected = self.registry.select(strategy.kind);

        let total = match strategy.policy {
            CombinationPolicy::Cumulative => selected
                .iter()
                .fold(original, |running, rule| rule.apply(running, quantity)),
            CombinationPolicy::Highest => selected
                .iter()
                .map(|rule| rule.apply(original, quantity))
                .min()
                .unwrap_or(original),
        };

        Ok(total)
    }

    /// Parses selector strings and computes the final price in one call.
    ///
    /// This is the operation hosts reach for: callers usually hold selector
    /// text ("BOTH", "CUMULATIVE"), not parsed strategies. Selector errors
    /// surface before the quantity check, so a request that is wrong on
    /// both counts reports the strategy first.
    pub fn calculate_for(
        &self,
        unit_price: Money,
        quantity: i64,
        kind_text: &str,
        policy_text: &str,
    ) -> PricingResult<Money> {
        let strategy = DiscountStrategy::parse(kind_text, policy_text)?;
        self.calculate(unit_price, quantity, &strategy)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{DiscountRule, PercentageRule, QuantityTieredRule, Tier};
    use crate::money::Rate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn rate(value: Decimal) -> Rate {
        Rate::new(value).unwrap()
    }

    /// Tiered 10→5% / 20→10% / 50→15% configured first, flat 10% second.
    fn sample_calculator() -> PriceCalculator {
        let tiered = QuantityTieredRule::new(vec![
            Tier::new(10, rate(dec!(0.05))),
            Tier::new(20, rate(dec!(0.10))),
            Tier::new(50, rate(dec!(0.15))),
        ])
        .unwrap();
        let flat = PercentageRule::new(rate(dec!(0.10)));

        PriceCalculator::new(RuleRegistry::new(vec![
            DiscountRule::QuantityTiered(tiered),
            DiscountRule::Percentage(flat),
        ]))
    }

    fn strategy(kind: &str, policy: &str) -> DiscountStrategy {
        DiscountStrategy::parse(kind, policy).unwrap()
    }

    #[test]
    fn test_quantity_cumulative_applies_tier_rate() {
        let calculator = sample_calculator();

        // 100 × 10 = 1000, tier 10 → 5% → 950
        let total = calculator
            .calculate(
                Money::new(dec!(100)),
                10,
                &strategy("QUANTITY", "CUMULATIVE"),
            )
            .unwrap();
        assert_eq!(total, Money::new(dec!(950)));
    }

    #[test]
    fn test_quantity_policies_agree_on_single_rule() {
        // With one selected rule, chaining and best-of coincide
        let calculator = sample_calculator();
        let unit = Money::new(dec!(100));

        for (qty, expected) in [(20, dec!(1800)), (50, dec!(4250))] {
            let cumulative = calculator
                .calculate(unit, qty, &strategy("QUANTITY", "CUMULATIVE"))
                .unwrap();
            let highest = calculator
                .calculate(unit, qty, &strategy("QUANTITY", "HIGHEST"))
                .unwrap();

            assert_eq!(cumulative, Money::new(expected));
            assert_eq!(highest, Money::new(expected));
        }
    }

    #[test]
    fn test_percentage_kind_selects_flat_rule_only() {
        let calculator = sample_calculator();
        let unit = Money::new(dec!(100));

        // 100 × 10 = 1000 → 10% off → 900 (the tier rule is not selected)
        let cumulative = calculator
            .calculate(unit, 10, &strategy("PERCENTAGE", "CUMULATIVE"))
            .unwrap();
        assert_eq!(cumulative, Money::new(dec!(900)));

        // 100 × 20 = 2000 → 10% off → 1800
        let highest = calculator
            .calculate(unit, 20, &strategy("PERCENTAGE", "HIGHEST"))
            .unwrap();
        assert_eq!(highest, Money::new(dec!(1800)));
    }

    #[test]
    fn test_both_cumulative_chains_in_configuration_order() {
        let calculator = sample_calculator();

        // 100 × 50 = 5000 → tier 15% → 4250 → flat 10% → 3825
        let total = calculator
            .calculate(Money::new(dec!(100)), 50, &strategy("BOTH", "CUMULATIVE"))
            .unwrap();
        assert_eq!(total, Money::new(dec!(3825)));
    }

    #[test]
    fn test_both_highest_takes_strongest_single_discount() {
        let calculator = sample_calculator();

        // Each rule prices 5000 independently: tier → 4250, flat → 4500
        let total = calculator
            .calculate(Money::new(dec!(100)), 50, &strategy("BOTH", "HIGHEST"))
            .unwrap();
        assert_eq!(total, Money::new(dec!(4250)));
    }

    #[test]
    fn test_highest_never_chains() {
        // At qty 10 the tier prices 1000 to 950 and the flat rule to 900.
        // Chaining would reach 855; HIGHEST keeps the single best rule.
        let calculator = sample_calculator();
        let total = calculator
            .calculate(Money::new(dec!(100)), 10, &strategy("BOTH", "HIGHEST"))
            .unwrap();
        assert_eq!(total, Money::new(dec!(900)));
    }

    #[test]
    fn test_negative_quantity_rejected_for_every_strategy() {
        let calculator = sample_calculator();
        let unit = Money::new(dec!(100));

        for kind in ["QUANTITY", "PERCENTAGE", "BOTH"] {
            for policy in ["CUMULATIVE", "HIGHEST"] {
                let err = calculator
                    .calculate(unit, -1, &strategy(kind, policy))
                    .unwrap_err();
                assert!(matches!(
                    err,
                    PricingError::InvalidQuantity { quantity: -1 }
                ));
            }
        }
    }

    #[test]
    fn test_zero_quantity_prices_to_zero() {
        let calculator = sample_calculator();

        let total = calculator
            .calculate(Money::new(dec!(100)), 0, &strategy("BOTH", "CUMULATIVE"))
            .unwrap();
        assert_eq!(total, Money::zero());
    }

    #[test]
    fn test_empty_selection_returns_original_total() {
        // No rules at all: every strategy prices at the undiscounted total
        let calculator = PriceCalculator::default();
        let unit = Money::new(dec!(100));

        for policy in ["CUMULATIVE", "HIGHEST"] {
            let total = calculator
                .calculate(unit, 3, &strategy("BOTH", policy))
                .unwrap();
            assert_eq!(total, Money::new(dec!(300)));
        }
    }

    #[test]
    fn test_calculate_for_parses_selectors() {
        let calculator = sample_calculator();

        let total = calculator
            .calculate_for(Money::new(dec!(100)), 50, "BOTH", "CUMULATIVE")
            .unwrap();
        assert_eq!(total, Money::new(dec!(3825)));
    }

    #[test]
    fn test_calculate_for_rejects_unknown_selectors() {
        let calculator = sample_calculator();
        let unit = Money::new(dec!(100));

        for (kind, policy) in [
            ("", "CUMULATIVE"),
            ("FOO", "CUMULATIVE"),
            ("BOTH", ""),
            ("BOTH", "FOO"),
        ] {
            let err = calculator.calculate_for(unit, 1, kind, policy).unwrap_err();
            assert!(matches!(err, PricingError::InvalidStrategy { .. }));
        }
    }

    #[test]
    fn test_bad_selector_reported_before_bad_quantity() {
        let calculator = sample_calculator();

        let err = calculator
            .calculate_for(Money::new(dec!(100)), -5, "FOO", "CUMULATIVE")
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidStrategy { .. }));
    }

    #[test]
    fn test_identical_inputs_give_bit_identical_results() {
        let calculator = sample_calculator();
        let descriptor = strategy("BOTH", "HIGHEST");

        let first = calculator
            .calculate(Money::new(dec!(100)), 50, &descriptor)
            .unwrap();
        let second = calculator
            .calculate(Money::new(dec!(100)), 50, &descriptor)
            .unwrap();

        assert_eq!(first, second);
        // Bit-identical, not merely equal-up-to-scale
        assert_eq!(first.amount().mantissa(), second.amount().mantissa());
        assert_eq!(first.amount().scale(), second.amount().scale());
    }

    #[test]
    fn test_calculator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PriceCalculator>();
    }
}

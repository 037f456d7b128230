//! # Rule Registry
//!
//! The immutable, ordered set of configured discount rules.

use crate::discount::DiscountRule;
use crate::strategy::DiscountKind;

// =============================================================================
// Rule Registry
// =============================================================================

/// Holds every configured discount rule in fixed configuration order.
///
/// ## Ordering Contract
/// `select` returns rules in the order they were configured, every time.
/// The cumulative policy folds rules left to right, so a registry that
/// reordered rules between calls would price identical requests
/// differently.
///
/// ## Lifecycle
/// Populated once at startup, read-only afterward. No interior mutability,
/// which is what lets one calculator serve concurrent callers without
/// locking.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<DiscountRule>,
}

impl RuleRegistry {
    /// Creates a registry from rules in configuration order.
    pub fn new(rules: Vec<DiscountRule>) -> Self {
        RuleRegistry { rules }
    }

    /// Selects the rules a kind applies to, preserving configuration order.
    ///
    /// The concrete kinds select their tagged subset; `Both` selects the
    /// full rule set exactly once.
    pub fn select(&self, kind: DiscountKind) -> Vec<&DiscountRule> {
        match kind {
            DiscountKind::Both => self.rules.iter().collect(),
            concrete => self
                .rules
                .iter()
                .filter(|rule| rule.kind() == concrete)
                .collect(),
        }
    }

    /// Returns every configured rule in order.
    #[inline]
    pub fn rules(&self) -> &[DiscountRule] {
        &self.rules
    }

    /// Number of configured rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are configured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{PercentageRule, QuantityTieredRule, Tier};
    use crate::money::Rate;
    use rust_decimal_macros::dec;

    /// Tiered rule first, flat rule second - the order config wires them.
    fn sample_registry() -> RuleRegistry {
        let tiered =
            QuantityTieredRule::new(vec![Tier::new(10, Rate::new(dec!(0.05)).unwrap())]).unwrap();
        let flat = PercentageRule::new(Rate::new(dec!(0.10)).unwrap());

        RuleRegistry::new(vec![
            DiscountRule::QuantityTiered(tiered),
            DiscountRule::Percentage(flat),
        ])
    }

    #[test]
    fn test_select_by_concrete_kind() {
        let registry = sample_registry();

        let quantity = registry.select(DiscountKind::Quantity);
        assert_eq!(quantity.len(), 1);
        assert_eq!(quantity[0].kind(), DiscountKind::Quantity);

        let percentage = registry.select(DiscountKind::Percentage);
        assert_eq!(percentage.len(), 1);
        assert_eq!(percentage[0].kind(), DiscountKind::Percentage);
    }

    #[test]
    fn test_both_selects_all_exactly_once() {
        let registry = sample_registry();
        let all = registry.select(DiscountKind::Both);
        assert_eq!(all.len(), registry.len());
    }

    #[test]
    fn test_selection_preserves_configuration_order() {
        let registry = sample_registry();

        let all = registry.select(DiscountKind::Both);
        assert_eq!(all[0].kind(), DiscountKind::Quantity);
        assert_eq!(all[1].kind(), DiscountKind::Percentage);

        // Stable across repeated calls
        let again = registry.select(DiscountKind::Both);
        assert_eq!(all, again);
    }

    #[test]
    fn test_empty_registry_selects_nothing() {
        let registry = RuleRegistry::default();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.select(DiscountKind::Both).is_empty());
        assert!(registry.select(DiscountKind::Quantity).is_empty());
        assert!(registry.select(DiscountKind::Percentage).is_empty());
    }
}

//! # Discount Rules
//!
//! The two built-in pricing adjustment rules and their closed-enum dispatch.
//!
//! ## Rule Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Discount Rules                                 │
//! │                                                                         │
//! │  PERCENTAGE                         QUANTITY-TIERED                     │
//! │  ──────────                         ───────────────                     │
//! │  One flat rate, any quantity        Rate depends on quantity            │
//! │                                                                         │
//! │  apply(5000, qty) = 5000·(1−r)      tiers: 10→5%, 20→10%, 50→15%        │
//! │                                        qty 9  → below all → 0%          │
//! │                                        qty 19 → tier 10   → 5%          │
//! │                                        qty 50 → tier 50   → 15%         │
//! │                                                                         │
//! │  Both are pure: same inputs, same output, no shared state               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation happens at construction, never at call time: a rule in hand
//! carries only range-checked rates and ordered thresholds.

use crate::error::ConfigViolation;
use crate::money::{Money, Rate};
use crate::strategy::DiscountKind;

// =============================================================================
// Percentage Rule
// =============================================================================

/// A flat percentage-off rule.
///
/// Quantity is accepted by [`apply`](PercentageRule::apply) only for
/// interface uniformity with the tiered rule; it never affects the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageRule {
    rate: Rate,
}

impl PercentageRule {
    /// Creates a rule from an already-validated rate.
    #[inline]
    pub const fn new(rate: Rate) -> Self {
        PercentageRule { rate }
    }

    /// Returns the configured rate.
    #[inline]
    pub const fn rate(&self) -> Rate {
        self.rate
    }

    /// Applies the discount: `amount − amount·rate`.
    pub fn apply(&self, base: Money, _quantity: i64) -> Money {
        base.apply_rate(self.rate)
    }
}

// =============================================================================
// Quantity-Tiered Rule
// =============================================================================

/// One tier of a quantity-tiered rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    min_quantity: i64,
    rate: Rate,
}

impl Tier {
    /// Creates a tier pairing a minimum quantity with its rate.
    #[inline]
    pub const fn new(min_quantity: i64, rate: Rate) -> Self {
        Tier { min_quantity, rate }
    }

    /// The smallest quantity this tier covers.
    #[inline]
    pub const fn min_quantity(&self) -> i64 {
        self.min_quantity
    }

    /// The rate granted at and above this tier's threshold.
    #[inline]
    pub const fn rate(&self) -> Rate {
        self.rate
    }
}

/// A quantity-tiered percentage rule.
///
/// Holds tiers in ascending threshold order. `apply` performs a floor
/// lookup: the greatest threshold not exceeding the quantity decides the
/// rate, and a quantity below every threshold gets no discount.
///
/// ## Rules
/// - Thresholds must be non-negative
/// - Thresholds must be strictly increasing (duplicates are rejected)
///
/// Both are enforced by [`QuantityTieredRule::new`]; a constructed rule
/// never re-checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityTieredRule {
    tiers: Vec<Tier>,
}

impl QuantityTieredRule {
    /// Creates a rule from tiers listed in ascending threshold order.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, ConfigViolation> {
        for tier in &tiers {
            if tier.min_quantity < 0 {
                return Err(ConfigViolation::NegativeThreshold {
                    threshold: tier.min_quantity,
                });
            }
        }
        for pair in tiers.windows(2) {
            if pair[1].min_quantity <= pair[0].min_quantity {
                return Err(ConfigViolation::ThresholdsNotIncreasing {
                    prev: pair[0].min_quantity,
                    next: pair[1].min_quantity,
                });
            }
        }
        Ok(QuantityTieredRule { tiers })
    }

    /// Returns the configured tiers, ascending by threshold.
    #[inline]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Floor lookup: the greatest threshold ≤ `quantity` decides the rate.
    ///
    /// Tiers are ascending, so the first match scanning from the top is the
    /// floor. Below every threshold the rate is zero.
    fn rate_for(&self, quantity: i64) -> Rate {
        self.tiers
            .iter()
            .rev()
            .find(|tier| quantity >= tier.min_quantity)
            .map(Tier::rate)
            .unwrap_or(Rate::zero())
    }

    /// Applies the tier rate for `quantity` to `base`.
    pub fn apply(&self, base: Money, quantity: i64) -> Money {
        base.apply_rate(self.rate_for(quantity))
    }
}

// =============================================================================
// Rule Dispatch
// =============================================================================

/// A configured discount rule.
///
/// Closed enum: new rule kinds are added as new variants with their own
/// `apply`, never by branching on type identity at call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountRule {
    /// Flat percentage-off.
    Percentage(PercentageRule),

    /// Quantity-tiered percentage-off.
    QuantityTiered(QuantityTieredRule),
}

impl DiscountRule {
    /// Applies the rule to `base` at `quantity`.
    ///
    /// Pure and lock-free: reads only the rule's immutable configuration,
    /// so concurrent callers need no synchronization.
    pub fn apply(&self, base: Money, quantity: i64) -> Money {
        match self {
            DiscountRule::Percentage(rule) => rule.apply(base, quantity),
            DiscountRule::QuantityTiered(rule) => rule.apply(base, quantity),
        }
    }

    /// The kind this rule is selected under.
    ///
    /// Always a concrete kind; a rule is never tagged [`DiscountKind::Both`].
    pub const fn kind(&self) -> DiscountKind {
        match self {
            DiscountRule::Percentage(_) => DiscountKind::Percentage,
            DiscountRule::QuantityTiered(_) => DiscountKind::Quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

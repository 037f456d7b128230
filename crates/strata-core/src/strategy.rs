//! # Discount Strategy
//!
//! The caller-requested strategy: which rule kinds apply and how their
//! effects combine into one final price.
//!
//! ## Selector Contract
//! Selectors arrive as text and are matched **exactly** against the
//! enumerated names. `"QUANTITY"` parses; `"quantity"`, `" QUANTITY"` and
//! `""` do not. Unmatched input is always rejected, never trimmed, folded,
//! or guessed - a caller that sends a bad selector finds out immediately
//! instead of silently pricing under a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, PricingResult};

/// Selector names accepted for a discount kind, in error-message order.
const KIND_NAMES: &str = "QUANTITY, PERCENTAGE, BOTH";

/// Selector names accepted for a combination policy.
const POLICY_NAMES: &str = "CUMULATIVE, HIGHEST";

// =============================================================================
// Discount Kind
// =============================================================================

/// Which subset of configured rules a request selects.
///
/// Rules themselves are tagged `Quantity` or `Percentage`, never `Both`;
/// `Both` exists only on the request side and selects the full rule set
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// Quantity-tiered rules only.
    Quantity,

    /// Flat percentage rules only.
    Percentage,

    /// Every configured rule, in configuration order.
    Both,
}

impl DiscountKind {
    /// Returns the exact selector name for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Quantity => "QUANTITY",
            DiscountKind::Percentage => "PERCENTAGE",
            DiscountKind::Both => "BOTH",
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive selector match. No aliases, no normalization.
impl FromStr for DiscountKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUANTITY" => Ok(DiscountKind::Quantity),
            "PERCENTAGE" => Ok(DiscountKind::Percentage),
            "BOTH" => Ok(DiscountKind::Both),
            other => Err(PricingError::InvalidStrategy {
                field: "discount kind",
                value: other.to_string(),
                expected: KIND_NAMES,
            }),
        }
    }
}

// =============================================================================
// Combination Policy
// =============================================================================

/// How multiple selected rules merge into one final price.
///
/// ## Policy Comparison
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                     Combination Policy Behavior                         │
/// │                                                                         │
/// │  CUMULATIVE                                                             │
/// │  ──────────                                                             │
/// │  • Rules chain left to right in configuration order                     │
/// │  • Each rule prices the previous rule's output                          │
/// │  • 5000 ── tier 15% ──► 4250 ── flat 10% ──► 3825                       │
/// │                                                                         │
/// │  HIGHEST                                                                │
/// │  ───────                                                                │
/// │  • Every rule prices the original total independently                   │
/// │  • The strongest single discount wins (lowest resulting price)          │
/// │  • 5000 ──► min(4250, 4500) ──► 4250                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CombinationPolicy {
    /// Chain every selected rule over the running total.
    Cumulative,

    /// Keep the single strongest discount against the original total.
    Highest,
}

impl CombinationPolicy {
    /// Returns the exact selector name for this policy.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CombinationPolicy::Cumulative => "CUMULATIVE",
            CombinationPolicy::Highest => "HIGHEST",
        }
    }
}

impl fmt::Display for CombinationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive selector match. No aliases, no normalization.
impl FromStr for CombinationPolicy {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUMULATIVE" => Ok(CombinationPolicy::Cumulative),
            "HIGHEST" => Ok(CombinationPolicy::Highest),
            other => Err(PricingError::InvalidStrategy {
                field: "combination policy",
                value: other.to_string(),
                expected: POLICY_NAMES,
            }),
        }
    }
}

// =============================================================================
// Strategy Descriptor
// =============================================================================

/// An immutable, validated (kind, policy) pair.
///
/// Built per request from the caller's selector strings and discarded after
/// use. Construction is the only validation point; a `DiscountStrategy` in
/// hand is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountStrategy {
    /// Which rule kinds apply.
    pub kind: DiscountKind,

    /// How their effects combine.
    pub policy: CombinationPolicy,
}

impl DiscountStrategy {
    /// Creates a strategy from already-parsed parts.
    #[inline]
    pub const fn new(kind: DiscountKind, policy: CombinationPolicy) -> Self {
        DiscountStrategy { kind, policy }
    }

    /// Parses caller-supplied selector strings.
    ///
    /// Both selectors must exactly match an enumerated name. Fails with
    /// [`PricingError::InvalidStrategy`] naming the offending selector
    /// otherwise; the kind selector is checked first.
    pub fn parse(kind_text: &str, policy_text: &str) -> PricingResult<Self> {
        let kind = kind_text.parse()?;
        let policy = policy_text.parse()?;
        Ok(DiscountStrategy { kind, policy })
    }
}

/// Display shows the selector pair ("BOTH/CUMULATIVE").
impl fmt::Display for DiscountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.policy)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

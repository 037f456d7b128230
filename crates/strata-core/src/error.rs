//! # Error Types
//!
//! Domain-specific error types for strata-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  strata-core errors (this file)                                         │
//! │  ├── PricingError     - Request-time failures (selector, quantity)      │
//! │  └── ConfigViolation  - Rule construction failures (rate, thresholds)   │
//! │                                                                         │
//! │  strata-config errors (separate crate)                                  │
//! │  └── ConfigError      - File read / TOML parse / validation failures    │
//! │                                                                         │
//! │  Flow: ConfigViolation → PricingError or ConfigError → caller           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (selector text, thresholds, rates)
//! 3. Errors are enum variants, never String
//! 4. Request-time errors are recoverable; configuration errors are fatal

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Request-time pricing failures.
///
/// Surfaced synchronously to the caller and never retried. The engine
/// rejects ambiguous input outright; it does not clamp, default, or guess.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A strategy selector did not exactly match an enumerated name.
    ///
    /// ## When This Occurs
    /// - Empty selector text
    /// - Unknown name ("FOO")
    /// - Case or whitespace mismatch ("quantity", " QUANTITY")
    #[error("Invalid {field} selector '{value}', expected one of: {expected}")]
    InvalidStrategy {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A negative quantity was supplied to `calculate`.
    #[error("Quantity must be non-negative, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// Rule configuration was rejected (wraps ConfigViolation).
    #[error("Invalid pricing configuration: {0}")]
    InvalidConfiguration(#[from] ConfigViolation),
}

// =============================================================================
// Configuration Violations
// =============================================================================

/// Configuration-time rule violations.
///
/// Detected once at startup while rules are constructed, before any request
/// runs. Fatal: a calculator must never become available over a rejected
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigViolation {
    /// A discount rate lies outside [0, 1].
    #[error("Discount rate {rate} is outside [0, 1]")]
    RateOutOfRange { rate: Decimal },

    /// A quantity threshold is negative.
    #[error("Quantity threshold {threshold} is negative")]
    NegativeThreshold { threshold: i64 },

    /// Tier thresholds are out of order or duplicated.
    #[error("Quantity thresholds must be strictly increasing: {next} follows {prev}")]
    ThresholdsNotIncreasing { prev: i64, next: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Configuration Error Types
//!
//! Errors surfaced while locating, parsing, and validating pricing
//! configuration. Every variant here is fatal at startup: a host that
//! cannot build a valid calculator must not serve prices.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Error Categories                       │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │      I/O        │  │     Syntax      │  │       Domain            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Read           │  │  Parse          │  │  Invalid                │ │
//! │  │  (file system)  │  │  (malformed     │  │  (rates out of range,   │ │
//! │  │                 │  │   TOML)         │  │   unordered tiers)      │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use strata_core::ConfigViolation;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error type covering every way startup loading can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A named configuration file could not be read.
    #[error("Failed to read pricing configuration at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not well-formed TOML.
    #[error("Failed to parse pricing configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but describes rules the engine rejects.
    #[error("Invalid pricing configuration: {0}")]
    Invalid(#[from] ConfigViolation),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_error_includes_path() {
        let err = ConfigError::Read {
            path: PathBuf::from("/etc/strata/pricing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("pricing.toml"));
    }

    #[test]
    fn test_violation_passes_through() {
        let err: ConfigError = ConfigViolation::RateOutOfRange { rate: dec!(1.5) }.into();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("Invalid pricing configuration"));
    }
}

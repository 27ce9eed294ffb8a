//! Storefront state-core configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GOLDEN_FIG_STATE_DIR` - Directory for disk-backed state (default: `./state`)
//! - `GOLDEN_FIG_CURRENCY` - Display currency code (default: `USD`)

use std::path::PathBuf;

use thiserror::Error;

use golden_fig_core::CurrencyCode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront state-core configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory where `DiskStorage` keeps one JSON record per partition key
    pub state_dir: PathBuf,
    /// Currency used when formatting prices for display
    pub currency: CurrencyCode,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid (empty
    /// state dir, unknown currency code).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let state_dir = get_env_or_default("GOLDEN_FIG_STATE_DIR", "./state");
        if state_dir.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "GOLDEN_FIG_STATE_DIR".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        let currency = get_env_or_default("GOLDEN_FIG_CURRENCY", "USD")
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("GOLDEN_FIG_CURRENCY".to_owned(), e.to_string())
            })?;

        Ok(Self {
            state_dir: PathBuf::from(state_dir),
            currency,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from("./state"),
            currency: CurrencyCode::USD,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(unsafe_code)] // env::set_var is unsafe in edition 2024; fine in tests
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.state_dir, PathBuf::from("./state"));
        assert_eq!(config.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_invalid_currency_is_rejected() {
        // SAFETY: test-only env mutation; no other test in this crate reads
        // GOLDEN_FIG_CURRENCY
        unsafe { std::env::set_var("GOLDEN_FIG_CURRENCY", "DOUBLOONS") };
        let result = StorefrontConfig::from_env();
        unsafe { std::env::remove_var("GOLDEN_FIG_CURRENCY") };

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(var, _)) if var == "GOLDEN_FIG_CURRENCY"));
    }
}

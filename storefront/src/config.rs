//! # API Configuration
//!
//! Base URLs for the three remote service groups plus the request timeout.
//! The marketplace exposes auth, catalog, and deals as separately deployed
//! endpoints, so each carries its own URL.

use std::env;
use std::time::Duration;

/// Default auth service group endpoint.
const DEFAULT_AUTH_URL: &str = "https://functions.poehali.dev/bb4abf3d-6f0e-4aa2-b4cc-7d715ba66359";
/// Default catalog/offers service group endpoint.
const DEFAULT_CATALOG_URL: &str =
    "https://functions.poehali.dev/170597f6-2ca7-4ea8-aa56-3bab0e5a86c1";
/// Default deals service group endpoint.
const DEFAULT_DEALS_URL: &str = "https://functions.poehali.dev/049d4ca1-6d0b-4102-a156-fb6a03988a52";

/// Per-request timeout applied to the pooled HTTP client.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Endpoint configuration for the marketplace client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Auth group: `action=register`, `action=login`.
    pub auth_url: String,
    /// Catalog group: `action=games|offers|my-offers|create-offer`.
    pub catalog_url: String,
    /// Deals group: `action=my-deals|create|pay|complete|messages|send-message`.
    pub deals_url: String,
    /// Timeout for every request issued through the client.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            deals_url: DEFAULT_DEALS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Build a config from the environment, falling back to the production
    /// endpoints.
    ///
    /// Recognized variables: `MARKET_AUTH_URL`, `MARKET_CATALOG_URL`,
    /// `MARKET_DEALS_URL`, `MARKET_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_url: env::var("MARKET_AUTH_URL").unwrap_or(defaults.auth_url),
            catalog_url: env::var("MARKET_CATALOG_URL").unwrap_or(defaults.catalog_url),
            deals_url: env::var("MARKET_DEALS_URL").unwrap_or(defaults.deals_url),
            timeout: env::var("MARKET_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = ApiConfig::default();
        assert!(config.auth_url.starts_with("https://"));
        assert_ne!(config.auth_url, config.deals_url);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}

//! # Configuration State
//!
//! Startup configuration for the page state.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`QRFORGE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after the provider mounts.

use serde::{Deserialize, Serialize};
use tracing::warn;

use qrforge_core::{Tab, DEFAULT_CRYPTO, MAX_BATCH_SIZE};

/// Values the store is seeded with when the provider mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Tab shown when the page opens.
    pub default_tab: Tab,

    /// Currency preselected on the Crypto tab.
    pub default_crypto: String,

    /// Upper bound on queued batch requests.
    pub max_batch_size: usize,
}

impl Default for ConfigState {
    /// Text tab, "Bitcoin", and the core batch limit.
    fn default() -> Self {
        ConfigState {
            default_tab: Tab::Text,
            default_crypto: DEFAULT_CRYPTO.to_string(),
            max_batch_size: MAX_BATCH_SIZE,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `QRFORGE_DEFAULT_TAB`: tab name, case-insensitive (e.g. "wifi")
    /// - `QRFORGE_DEFAULT_CRYPTO`: currency name (e.g. "Ethereum")
    /// - `QRFORGE_MAX_BATCH_SIZE`: positive integer
    ///
    /// Values that don't parse are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup("QRFORGE_DEFAULT_TAB") {
            match raw.parse::<Tab>() {
                Ok(tab) => config.default_tab = tab,
                Err(e) => warn!(%e, "Ignoring QRFORGE_DEFAULT_TAB"),
            }
        }

        if let Some(crypto) = lookup("QRFORGE_DEFAULT_CRYPTO") {
            let crypto = crypto.trim();
            if !crypto.is_empty() {
                config.default_crypto = crypto.to_string();
            }
        }

        if let Some(raw) = lookup("QRFORGE_MAX_BATCH_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.max_batch_size = size,
                _ => warn!(value = %raw, "Ignoring QRFORGE_MAX_BATCH_SIZE"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.default_tab, Tab::Text);
        assert_eq!(config.default_crypto, "Bitcoin");
        assert_eq!(config.max_batch_size, MAX_BATCH_SIZE);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("QRFORGE_DEFAULT_TAB", "wifi"),
            ("QRFORGE_DEFAULT_CRYPTO", "Ethereum"),
            ("QRFORGE_MAX_BATCH_SIZE", "25"),
        ]));
        assert_eq!(config.default_tab, Tab::Wifi);
        assert_eq!(config.default_crypto, "Ethereum");
        assert_eq!(config.max_batch_size, 25);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("QRFORGE_DEFAULT_TAB", "Zoom"),
            ("QRFORGE_DEFAULT_CRYPTO", "   "),
            ("QRFORGE_MAX_BATCH_SIZE", "0"),
        ]));
        assert_eq!(config, ConfigState::default());
    }
}

//! Application configuration
//!
//! Configuration loaded from `.storefront.toml`.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.storefront.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How many restaurants the catalog shows before "See All"
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,

    /// Flat delivery fee added at checkout (smallest currency unit)
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: u64,

    /// Flat service fee added at checkout (smallest currency unit)
    #[serde(default = "default_service_fee")]
    pub service_fee: u64,

    /// ISO currency code used when formatting prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_page_limit() -> usize {
    12
}

fn default_delivery_fee() -> u64 {
    5_000
}

fn default_service_fee() -> u64 {
    2_000
}

fn default_currency() -> String {
    "IDR".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_limit: default_page_limit(),
            delivery_fee: default_delivery_fee(),
            service_fee: default_service_fee(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

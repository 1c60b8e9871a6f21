//! Application Configuration
//!
//! Compile-time defaults, optionally overridden from browser local storage so a
//! deployment can point the UI at another API without rebuilding.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::taxes::TAX_RATES_PAGE_SIZE;

/// Local storage key holding a JSON `AppConfig` override
pub const CONFIG_STORAGE_KEY: &str = "billing_ui_config";

/// Local storage key holding the API bearer token
pub const AUTH_TOKEN_STORAGE_KEY: &str = "authToken";

const DEFAULT_API_URL: &str = "http://localhost:3000/graphql";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} = {value}")]
    Invalid { field: String, value: String },

    #[error("Configuration parse error: {message}")]
    Parse { message: String },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub tax_rates: TaxRatesConfig,
}

/// GraphQL endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Full URL of the GraphQL endpoint
    pub graphql_url: String,

    /// Bearer token sent with every request
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,

    /// Sent as `x-billing-organization` when set
    pub organization_id: Option<String>,
}

/// Tax rate settings page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRatesConfig {
    pub page_size: u32,

    /// How long the "could not load more" notification stays up
    pub notification_timeout_ms: u32,

    /// Distance from the bottom of the list that counts as "reached bottom"
    pub scroll_threshold_px: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            graphql_url: option_env!("BILLING_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            auth_token: None,
            organization_id: None,
        }
    }
}

impl Default for TaxRatesConfig {
    fn default() -> Self {
        Self {
            page_size: TAX_RATES_PAGE_SIZE,
            notification_timeout_ms: 5000,
            scroll_threshold_px: 48.0,
        }
    }
}

impl AppConfig {
    /// Parse an override document on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.graphql_url.trim();
        let has_scheme =
            url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/');
        if !has_scheme {
            return Err(ConfigError::Invalid {
                field: "api.graphql_url".to_string(),
                value: self.api.graphql_url.clone(),
            });
        }
        if self.tax_rates.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "tax_rates.page_size".to_string(),
                value: self.tax_rates.page_size.to_string(),
            });
        }
        Ok(())
    }

    /// Load configuration from local storage, falling back to defaults
    pub fn load() -> Self {
        let storage = LocalStorage::raw();
        let mut config = match storage.get_item(CONFIG_STORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring stored configuration: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        config.api.auth_token = storage
            .get_item(AUTH_TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty());
        config
    }
}

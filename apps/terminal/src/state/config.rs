//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ZWEETI_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zweeti_core::{TaxRate, DEFAULT_TAX_RATE_BPS, STORE_NAME};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Outlet name shown in the terminal banner.
    pub store_name: String,

    /// Path to the durable store's SQLite file.
    pub database_path: PathBuf,

    /// GST rate in basis points (500 = 5%).
    pub tax_rate_bps: u32,

    /// Whether the cashier must sign in (phone + OTP) before billing.
    /// Off by default for development.
    pub require_login: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: STORE_NAME.to_string(),
            database_path: PathBuf::from("zweeti.db"),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            require_login: false,
        }
    }
}

impl AppConfig {
    /// Builds configuration from environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `ZWEETI_STORE_NAME`: override the banner name
    /// - `ZWEETI_DB_PATH`: override the SQLite file path
    /// - `ZWEETI_TAX_RATE`: GST percentage, e.g. "5" or "5.0"
    /// - `ZWEETI_REQUIRE_LOGIN`: "1"/"true" to enable the login gate
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(store_name) = std::env::var("ZWEETI_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(path) = std::env::var("ZWEETI_DB_PATH") {
            config.database_path = PathBuf::from(path);
        }

        if let Ok(rate_str) = std::env::var("ZWEETI_TAX_RATE") {
            if let Ok(pct) = rate_str.parse::<f64>() {
                config.tax_rate_bps = (pct * 100.0).round() as u32;
            }
        }

        if let Ok(flag) = std::env::var("ZWEETI_REQUIRE_LOGIN") {
            config.require_login = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        config
    }

    /// The configured GST rate as a typed value.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

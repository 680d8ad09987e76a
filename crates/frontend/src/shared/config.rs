//! Build-time configuration for the sales API client.
//!
//! Values are baked in at compile time, the only environment a CSR bundle has:
//!
//! ```sh
//! SALES_API_BASE=https://api.example.com SALES_API_TIMEOUT_MS=15000 trunk build
//! ```

use crate::shared::api_utils::api_base;

/// Request timeout used when `SALES_API_TIMEOUT_MS` is unset or unparsable.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Path of the sales query endpoint below the base URL.
pub const SALES_PATH: &str = "/api/sales";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and port, without trailing slash
    pub base_url: String,
    pub timeout_ms: u32,
}

impl ApiConfig {
    /// Reads the build environment, falling back to the page's own host.
    pub fn load() -> Self {
        Self::from_parts(
            option_env!("SALES_API_BASE"),
            option_env!("SALES_API_TIMEOUT_MS"),
            api_base,
        )
    }

    fn from_parts(
        base: Option<&str>,
        timeout: Option<&str>,
        fallback_base: impl FnOnce() -> String,
    ) -> Self {
        let base_url = match base.map(str::trim).filter(|b| !b.is_empty()) {
            Some(b) => b.trim_end_matches('/').to_string(),
            None => fallback_base(),
        };
        let timeout_ms = match timeout.map(|t| t.trim().parse::<u32>()) {
            Some(Ok(ms)) if ms > 0 => ms,
            Some(_) => {
                log::warn!("Ignoring invalid SALES_API_TIMEOUT_MS, using {}", DEFAULT_TIMEOUT_MS);
                DEFAULT_TIMEOUT_MS
            }
            None => DEFAULT_TIMEOUT_MS,
        };
        Self {
            base_url,
            timeout_ms,
        }
    }

    pub fn sales_url(&self) -> String {
        format!("{}{}", self.base_url, SALES_PATH)
    }
}

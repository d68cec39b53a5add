use serde::Deserialize;
use std::time::Duration;

use crate::catalog::DEFAULT_BASE_URL;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogSettings,
    pub ui: UiSettings,
}

/// Where and how to reach the NeoWs catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Base URL of the NeoWs REST API (e.g., "https://api.nasa.gov/neo/rest/v1").
    pub base_url: String,
    /// API key, used only when neither the CLI flag nor the environment provide one.
    pub api_key: Option<String>,
    /// Overall request timeout in seconds. Unset keeps the HTTP client default.
    pub timeout_seconds: Option<u64>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

impl CatalogSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Host part of the base URL, for display in the header.
    pub fn host_label(&self) -> String {
        reqwest::Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_owned))
            .unwrap_or_else(|| self.base_url.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Event loop tick in milliseconds; drives the loading spinner.
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

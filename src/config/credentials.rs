//! Resolution of the catalog access key.
//!
//! The key is resolved once at start-up and then only travels inside a
//! [`SecureString`], so it never shows up in logs or panic messages.

use super::types::CatalogSettings;

/// Environment variable holding the NeoWs API key.
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Rate-limited key accepted by api.nasa.gov without registration.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building requests.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Where the API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    CommandLine,
    Environment,
    ConfigFile,
    Demo,
}

#[derive(Debug, Clone)]
pub struct ResolvedCredential {
    pub key: SecureString,
    pub source: CredentialSource,
}

/// Pick the API key by precedence: CLI flag, environment, config file, demo key.
///
/// Blank values are treated as absent.
pub fn resolve_api_key(
    cli: Option<String>,
    env: Option<String>,
    settings: &CatalogSettings,
) -> ResolvedCredential {
    let candidates = [
        (cli, CredentialSource::CommandLine),
        (env, CredentialSource::Environment),
        (settings.api_key.clone(), CredentialSource::ConfigFile),
    ];

    candidates
        .into_iter()
        .find_map(|(value, source)| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| ResolvedCredential {
                    key: SecureString::new(v),
                    source,
                })
        })
        .unwrap_or_else(|| ResolvedCredential {
            key: SecureString::new(DEMO_API_KEY.to_string()),
            source: CredentialSource::Demo,
        })
}

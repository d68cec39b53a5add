mod credentials;
mod loader;
mod types;

pub use credentials::{resolve_api_key, CredentialSource, ResolvedCredential, SecureString, API_KEY_ENV, DEMO_API_KEY};
pub use loader::ConfigError;
pub use types::{CatalogSettings, Config, UiSettings};

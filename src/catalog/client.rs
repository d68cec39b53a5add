use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{AsteroidRecord, BrowsePage};
use crate::catalog::Catalog;
use crate::config::SecureString;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// HTTP client for the NeoWs REST API.
///
/// Every request carries the access key as the `api_key` query parameter.
pub struct NeoWsClient {
    client: Client,
    base_url: Url,
    api_key: SecureString,
}

impl NeoWsClient {
    /// Build a client rooted at `base_url`.
    ///
    /// `timeout` of `None` leaves reqwest's default (no overall timeout).
    pub fn new(
        base_url: &str,
        api_key: SecureString,
        timeout: Option<Duration>,
    ) -> Result<Self, CatalogError> {
        let parsed = Url::parse(base_url).map_err(|e| CatalogError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| CatalogError::Client { source })?;

        Ok(Self {
            client,
            base_url: parsed,
            api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/{segments...}?api_key=...`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("api_key", self.api_key.expose());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Unreachable { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Unreachable { source })?;
        serde_json::from_slice(&body).map_err(|source| CatalogError::Malformed { source })
    }
}

#[async_trait]
impl Catalog for NeoWsClient {
    async fn lookup(&self, id: &str) -> Result<AsteroidRecord, CatalogError> {
        let url = self.endpoint(&["neo", id])?;
        tracing::debug!(id = %id, "Fetching asteroid record");
        self.get_json(url).await.map_err(|err| match err {
            CatalogError::Status { status } if status == StatusCode::NOT_FOUND.as_u16() => {
                CatalogError::NotFound { id: id.to_string() }
            }
            other => other,
        })
    }

    async fn browse(&self) -> Result<BrowsePage, CatalogError> {
        let url = self.endpoint(&["neo", "browse"])?;
        tracing::debug!("Fetching catalog listing");
        self.get_json(url).await
    }
}

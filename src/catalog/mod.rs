//! Read-only access to the NASA NeoWs near-Earth-object catalog.
//!
//! The [`Catalog`] trait is the seam between the screen and the network:
//! the production implementation is [`NeoWsClient`], tests substitute
//! in-memory catalogs.

mod client;
mod error;
mod types;

pub use client::{NeoWsClient, DEFAULT_BASE_URL};
pub use error::CatalogError;
pub use types::{AsteroidRecord, BrowsePage, NeoSummary};

use async_trait::async_trait;

/// Source of asteroid records.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch a single object by its catalog identifier.
    async fn lookup(&self, id: &str) -> Result<AsteroidRecord, CatalogError>;

    /// Fetch the first page of the catalog listing.
    async fn browse(&self) -> Result<BrowsePage, CatalogError>;
}

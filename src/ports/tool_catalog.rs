use async_trait::async_trait;

use crate::domain::catalog::{ToolCostRecord, ToolListing};

/// Read-only port for the tool cost catalog.
///
/// The catalog is loaded once at startup and never mutated, so
/// implementations can serve any number of concurrent readers.
#[async_trait]
pub trait ToolCatalog: Send + Sync {
    /// Returns one page of records, sorted and windowed per `listing`.
    async fn list(&self, listing: &ToolListing) -> Result<Vec<ToolCostRecord>, CatalogError>;

    /// Finds the record whose identifier equals `tool_id` exactly.
    async fn find(&self, tool_id: &str) -> Result<Option<ToolCostRecord>, CatalogError>;
}

/// Errors that can occur while reading the catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Tool catalog unavailable: {0}")]
    Unavailable(String),
}

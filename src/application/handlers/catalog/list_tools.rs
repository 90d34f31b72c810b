//! ListToolsHandler - Query handler for paginated catalog listings.

use std::sync::Arc;

use crate::domain::catalog::{ToolCostRecord, ToolListing};
use crate::ports::{CatalogError, ToolCatalog};

/// Query to list one page of the tool catalog.
#[derive(Debug, Clone, Default)]
pub struct ListToolsQuery {
    pub listing: ToolListing,
}

/// Result of a successful listing: records in sort order.
pub type ListToolsResult = Vec<ToolCostRecord>;

/// Handler for listing catalog records.
pub struct ListToolsHandler {
    catalog: Arc<dyn ToolCatalog>,
}

impl ListToolsHandler {
    pub fn new(catalog: Arc<dyn ToolCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: ListToolsQuery) -> Result<ListToolsResult, CatalogError> {
        self.catalog.list(&query.listing).await
    }
}

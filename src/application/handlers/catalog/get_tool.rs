//! GetToolHandler - Query handler for a single catalog record.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::catalog::ToolCostRecord;
use crate::ports::{CatalogError, ToolCatalog};

/// Query to fetch one tool by its exact identifier.
#[derive(Debug, Clone)]
pub struct GetToolQuery {
    pub tool_id: String,
}

/// Result of a successful lookup.
pub type GetToolResult = ToolCostRecord;

/// Errors from a single-tool lookup.
#[derive(Debug, Error)]
pub enum GetToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Handler for looking up a tool by identifier.
pub struct GetToolHandler {
    catalog: Arc<dyn ToolCatalog>,
}

impl GetToolHandler {
    pub fn new(catalog: Arc<dyn ToolCatalog>) -> Self {
        Self { catalog }
    }

    /// The identifier is compared as given; no normalization is applied.
    pub async fn handle(&self, query: GetToolQuery) -> Result<GetToolResult, GetToolError> {
        self.catalog
            .find(&query.tool_id)
            .await?
            .ok_or(GetToolError::NotFound(query.tool_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryToolCatalog;
    use crate::domain::catalog::tool_cost::fixtures::record;
    use crate::domain::catalog::ToolListing;
    use async_trait::async_trait;

    fn handler() -> GetToolHandler {
        let catalog = InMemoryToolCatalog::new(vec![record("multiqc", 0.002, 0.001, 0.006)])
            .unwrap();
        GetToolHandler::new(Arc::new(catalog))
    }

    struct FailingCatalog;

    #[async_trait]
    impl ToolCatalog for FailingCatalog {
        async fn list(&self, _listing: &ToolListing) -> Result<Vec<ToolCostRecord>, CatalogError> {
            Err(CatalogError::Unavailable("offline".to_string()))
        }

        async fn find(&self, _tool_id: &str) -> Result<Option<ToolCostRecord>, CatalogError> {
            Err(CatalogError::Unavailable("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn returns_matching_record() {
        let tool = handler()
            .handle(GetToolQuery {
                tool_id: "multiqc".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(tool.tool_id, "multiqc");
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let result = handler()
            .handle(GetToolQuery {
                tool_id: "MultiQC".to_string(),
            })
            .await;
        assert!(matches!(result, Err(GetToolError::NotFound(id)) if id == "MultiQC"));
    }

    #[tokio::test]
    async fn catalog_failures_propagate() {
        let handler = GetToolHandler::new(Arc::new(FailingCatalog));
        let result = handler
            .handle(GetToolQuery {
                tool_id: "multiqc".to_string(),
            })
            .await;
        assert!(matches!(result, Err(GetToolError::Catalog(_))));
    }
}

//! EstimateWorkflowCostHandler - Resolves a workflow's tools against the
//! catalog and totals their costs.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::workflow::{CostEstimate, WorkflowDocument, WorkflowError};
use crate::ports::{CatalogError, ToolCatalog};

/// Query to estimate the cost of an uploaded workflow.
#[derive(Debug, Clone)]
pub struct EstimateWorkflowCostQuery {
    /// Raw upload contents.
    pub workflow: Vec<u8>,
}

/// Result of a successful estimation.
pub type EstimateWorkflowCostResult = CostEstimate;

/// Errors from workflow estimation. Estimation either completes or fails
/// as a whole.
#[derive(Debug, Error)]
pub enum EstimateWorkflowError {
    #[error("Invalid workflow file: {0}")]
    InvalidInput(#[from] WorkflowError),

    #[error("{0}")]
    Internal(String),
}

impl From<CatalogError> for EstimateWorkflowError {
    fn from(error: CatalogError) -> Self {
        EstimateWorkflowError::Internal(error.to_string())
    }
}

/// Handler for workflow cost estimation.
pub struct EstimateWorkflowCostHandler {
    catalog: Arc<dyn ToolCatalog>,
}

impl EstimateWorkflowCostHandler {
    pub fn new(catalog: Arc<dyn ToolCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        query: EstimateWorkflowCostQuery,
    ) -> Result<EstimateWorkflowCostResult, EstimateWorkflowError> {
        let document = WorkflowDocument::from_slice(&query.workflow)?;

        let mut tools = Vec::new();
        let mut missing_tools = Vec::new();
        for tool_id in document.tool_references() {
            match self.catalog.find(&tool_id).await? {
                Some(record) => tools.push(record),
                None => missing_tools.push(tool_id),
            }
        }

        tracing::debug!(
            steps = document.steps().len(),
            resolved = tools.len(),
            missing = missing_tools.len(),
            "Estimated workflow cost"
        );

        Ok(CostEstimate::new(tools, missing_tools))
    }
}

//! HTTP handlers for workflow endpoints.

use std::sync::Arc;

use axum::extract::multipart::{Field, Multipart, MultipartError, MultipartRejection};
use axum::extract::{Json, State};
use axum::http::StatusCode;

use crate::application::handlers::workflow::{
    EstimateWorkflowCostHandler, EstimateWorkflowCostQuery,
};
use crate::ports::ToolCatalog;

use super::super::error::ApiError;
use super::dto::CostEstimateResponse;

/// Multipart field carrying the workflow file.
pub const WORKFLOW_FIELD: &str = "galaxyWorkflow";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for workflow estimation.
#[derive(Clone)]
pub struct WorkflowAppState {
    pub catalog: Arc<dyn ToolCatalog>,
}

impl WorkflowAppState {
    pub fn new(catalog: Arc<dyn ToolCatalog>) -> Self {
        Self { catalog }
    }

    pub fn estimate_workflow_cost_handler(&self) -> EstimateWorkflowCostHandler {
        EstimateWorkflowCostHandler::new(self.catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /workflow
///
/// Accepts a multipart upload with the workflow in the `galaxyWorkflow` field
/// and returns the summed cost of every tool it references.
pub async fn estimate_workflow_cost(
    State(state): State<WorkflowAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CostEstimateResponse>, ApiError> {
    let mut multipart =
        multipart.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let workflow = read_workflow_field(&mut multipart).await?;

    let handler = state.estimate_workflow_cost_handler();
    let estimate = handler
        .handle(EstimateWorkflowCostQuery { workflow })
        .await?;

    Ok(Json(estimate.into()))
}

async fn read_workflow_field(multipart: &mut Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(upload_error)?
    {
        if field.name() == Some(WORKFLOW_FIELD) {
            return read_field(field).await;
        }
    }

    Err(ApiError::Unprocessable(format!(
        "Missing multipart field `{WORKFLOW_FIELD}`"
    )))
}

async fn read_field(field: Field<'_>) -> Result<Vec<u8>, ApiError> {
    field
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(upload_error)
}

/// Oversized uploads are 413 and malformed multipart streams are 400.
fn upload_error(error: MultipartError) -> ApiError {
    match error.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(error.body_text()),
        StatusCode::BAD_REQUEST => ApiError::BadRequest(error.body_text()),
        _ => ApiError::Internal(error.body_text()),
    }
}

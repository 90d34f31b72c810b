//! HTTP handlers for catalog endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Path, Query, State};

use crate::application::handlers::catalog::{
    GetToolHandler, GetToolQuery, ListToolsHandler, ListToolsQuery,
};
use crate::domain::catalog::{CostField, SortOrder, ToolListing, MAX_PAGE_SIZE};
use crate::ports::ToolCatalog;

use super::super::error::ApiError;
use super::dto::{ListToolsParams, ToolResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing catalog dependencies.
#[derive(Clone)]
pub struct CatalogAppState {
    pub catalog: Arc<dyn ToolCatalog>,
}

impl CatalogAppState {
    pub fn new(catalog: Arc<dyn ToolCatalog>) -> Self {
        Self { catalog }
    }

    pub fn list_tools_handler(&self) -> ListToolsHandler {
        ListToolsHandler::new(self.catalog.clone())
    }

    pub fn get_tool_handler(&self) -> GetToolHandler {
        GetToolHandler::new(self.catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

impl ListToolsParams {
    /// Builds a validated listing. Unknown sort fields and orders fall back
    /// to their defaults; out-of-range `skip`/`limit` values are rejected.
    pub fn to_listing(&self) -> Result<ToolListing, ApiError> {
        let skip = match self.skip {
            None => 0,
            Some(skip) => usize::try_from(skip).map_err(|_| {
                ApiError::Unprocessable(format!("skip must be non-negative, got {skip}"))
            })?,
        };
        let limit = match self.limit {
            None => MAX_PAGE_SIZE,
            Some(limit) => usize::try_from(limit).map_err(|_| {
                ApiError::Unprocessable(format!(
                    "limit must be between 1 and {MAX_PAGE_SIZE}, got {limit}"
                ))
            })?,
        };
        let sort_by = self
            .sort_by
            .as_deref()
            .map(CostField::from_param)
            .unwrap_or_default();
        let order = self
            .sort_order
            .as_deref()
            .map(SortOrder::from_param)
            .unwrap_or_default();

        Ok(ToolListing::new(sort_by, order, skip, limit)?)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /tools?skip=0&limit=500&sort_by=averageCostPerJob&sort_order=asc
///
/// Returns one page of the catalog, sorted by the requested cost statistic.
pub async fn list_tools(
    State(state): State<CatalogAppState>,
    params: Result<Query<ListToolsParams>, QueryRejection>,
) -> Result<Json<Vec<ToolResponse>>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;
    let listing = params.to_listing()?;

    let handler = state.list_tools_handler();
    let tools = handler.handle(ListToolsQuery { listing }).await?;

    Ok(Json(tools.into_iter().map(ToolResponse::from).collect()))
}

/// GET /tools/:tool_id
///
/// Returns the tool whose identifier matches exactly.
pub async fn get_tool(
    State(state): State<CatalogAppState>,
    Path(tool_id): Path<String>,
) -> Result<Json<ToolResponse>, ApiError> {
    let handler = state.get_tool_handler();
    let tool = handler.handle(GetToolQuery { tool_id }).await?;

    Ok(Json(tool.into()))
}

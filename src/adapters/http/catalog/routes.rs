//! HTTP routes for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_tool, list_tools, CatalogAppState};

/// Creates the catalog router with all routes.
pub fn catalog_routes(state: CatalogAppState) -> Router {
    Router::new()
        // GET /tools
        .route("/tools", get(list_tools))
        // GET /tools/:tool_id
        .route("/tools/:tool_id", get(get_tool))
        .with_state(state)
}

//! HTTP routes for workflow endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{estimate_workflow_cost, WorkflowAppState};

/// Creates the workflow router.
pub fn workflow_routes(state: WorkflowAppState) -> Router {
    Router::new()
        // POST /workflow
        .route("/workflow", post(estimate_workflow_cost))
        .with_state(state)
}

//! Workflow HTTP adapter module.
//!
//! Provides the multipart upload endpoint for workflow cost estimation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CostEstimateResponse, MissingToolResponse};
pub use handlers::{WorkflowAppState, WORKFLOW_FIELD};
pub use routes::workflow_routes;

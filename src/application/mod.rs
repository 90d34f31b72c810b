//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation is read-only, so there are only query handlers.

pub mod handlers;

pub use handlers::{
    // Catalog handlers
    GetToolError, GetToolHandler, GetToolQuery, ListToolsHandler, ListToolsQuery,
    // Workflow handlers
    EstimateWorkflowCostHandler, EstimateWorkflowCostQuery, EstimateWorkflowError,
};

//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod catalog;
pub mod workflow;

pub use catalog::{
    GetToolError, GetToolHandler, GetToolQuery, GetToolResult, ListToolsHandler, ListToolsQuery,
    ListToolsResult,
};
pub use workflow::{
    EstimateWorkflowCostHandler, EstimateWorkflowCostQuery, EstimateWorkflowCostResult,
    EstimateWorkflowError,
};

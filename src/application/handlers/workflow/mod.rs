//! Workflow query handlers.

mod estimate_workflow_cost;

pub use estimate_workflow_cost::{
    EstimateWorkflowCostHandler, EstimateWorkflowCostQuery, EstimateWorkflowCostResult,
    EstimateWorkflowError,
};

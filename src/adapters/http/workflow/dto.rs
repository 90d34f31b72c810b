//! HTTP DTOs for workflow endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::workflow::CostEstimate;

use super::super::catalog::ToolResponse;

/// A workflow tool with no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingToolResponse {
    pub tool_id: String,
}

/// Response body for `POST /workflow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimateResponse {
    pub avg_cost_est: f64,
    pub median_cost_est: f64,
    pub p95_cost_est: f64,
    pub tools: Vec<ToolResponse>,
    pub missing_tools: Vec<MissingToolResponse>,
}

impl From<CostEstimate> for CostEstimateResponse {
    fn from(estimate: CostEstimate) -> Self {
        Self {
            avg_cost_est: estimate.avg_cost_est,
            median_cost_est: estimate.median_cost_est,
            p95_cost_est: estimate.p95_cost_est,
            tools: estimate.tools.into_iter().map(ToolResponse::from).collect(),
            missing_tools: estimate
                .missing_tools
                .into_iter()
                .map(|tool_id| MissingToolResponse { tool_id })
                .collect(),
        }
    }
}

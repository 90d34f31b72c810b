//! Workflow cost estimate aggregation.

use crate::domain::catalog::{CostField, ToolCostRecord};

/// Aggregated cost of a workflow, built fresh for each estimation request.
///
/// Each total is the plain sum of the matching per-tool statistic. Summing
/// per-tool medians or 95th percentiles does not give the percentile of the
/// combined run; the totals are indicative only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostEstimate {
    pub avg_cost_est: f64,
    pub median_cost_est: f64,
    pub p95_cost_est: f64,
    /// Catalog records for every resolved step, in step order.
    pub tools: Vec<ToolCostRecord>,
    /// Identifiers that had no catalog entry, in step order.
    pub missing_tools: Vec<String>,
}

impl CostEstimate {
    pub fn new(tools: Vec<ToolCostRecord>, missing_tools: Vec<String>) -> Self {
        let total = |field: CostField| tools.iter().fold(0.0, |sum, tool| sum + tool.cost(field));

        Self {
            avg_cost_est: total(CostField::Average),
            median_cost_est: total(CostField::Median),
            p95_cost_est: total(CostField::P95),
            tools,
            missing_tools,
        }
    }
}

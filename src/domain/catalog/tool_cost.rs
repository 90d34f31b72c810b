//! Per-tool job cost statistics.

use super::listing::CostField;

/// One catalog row: observed cost, runtime, input size and memory statistics
/// for a single computational tool.
///
/// Identifiers are lowercase and unique within a catalog. All statistics are
/// non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCostRecord {
    pub tool_id: String,

    /// Cost per job, in currency units.
    pub average_cost_per_job: f64,
    pub median_cost_per_job: f64,
    pub p95_cost_per_job: f64,

    /// Job runtime, in whole seconds.
    pub average_job_runtime_sec: u64,
    pub median_job_runtime_sec: u64,
    pub p95_job_runtime_sec: u64,

    /// Job input size, in megabytes.
    pub average_job_input_size_mb: f64,
    pub median_job_input_size_mb: f64,
    pub p95_job_input_size_mb: f64,

    /// Total number of observed jobs.
    pub num_jobs: u64,

    /// Allocated memory, in gigabytes.
    pub average_allocated_memory_gb: f64,
    pub median_allocated_memory_gb: f64,
    pub p95_allocated_memory_gb: f64,
}

impl ToolCostRecord {
    /// Returns the cost statistic selected by `field`.
    pub fn cost(&self, field: CostField) -> f64 {
        match field {
            CostField::Average => self.average_cost_per_job,
            CostField::Median => self.median_cost_per_job,
            CostField::P95 => self.p95_cost_per_job,
        }
    }
}

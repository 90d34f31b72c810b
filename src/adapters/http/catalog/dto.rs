//! HTTP DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ToolCostRecord;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for `GET /tools`.
///
/// Signed integers so that negative values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListToolsParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Wire representation of a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub tool_id: String,
    pub average_cost_per_job: f64,
    pub median_cost_per_job: f64,
    pub p95_cost_per_job: f64,
    pub average_job_runtime_sec: u64,
    pub median_job_runtime_sec: u64,
    pub p95_job_runtime_sec: u64,
    #[serde(rename = "averageJobInputSizeMB")]
    pub average_job_input_size_mb: f64,
    #[serde(rename = "medianJobInputSizeMB")]
    pub median_job_input_size_mb: f64,
    #[serde(rename = "p95JobInputSizeMB")]
    pub p95_job_input_size_mb: f64,
    pub num_jobs: u64,
    #[serde(rename = "averageAllocatedMemoryGB")]
    pub average_allocated_memory_gb: f64,
    #[serde(rename = "medianAllocatedMemoryGB")]
    pub median_allocated_memory_gb: f64,
    #[serde(rename = "p95AllocatedMemoryGB")]
    pub p95_allocated_memory_gb: f64,
}

impl From<ToolCostRecord> for ToolResponse {
    fn from(record: ToolCostRecord) -> Self {
        Self {
            tool_id: record.tool_id,
            average_cost_per_job: record.average_cost_per_job,
            median_cost_per_job: record.median_cost_per_job,
            p95_cost_per_job: record.p95_cost_per_job,
            average_job_runtime_sec: record.average_job_runtime_sec,
            median_job_runtime_sec: record.median_job_runtime_sec,
            p95_job_runtime_sec: record.p95_job_runtime_sec,
            average_job_input_size_mb: record.average_job_input_size_mb,
            median_job_input_size_mb: record.median_job_input_size_mb,
            p95_job_input_size_mb: record.p95_job_input_size_mb,
            num_jobs: record.num_jobs,
            average_allocated_memory_gb: record.average_allocated_memory_gb,
            median_allocated_memory_gb: record.median_allocated_memory_gb,
            p95_allocated_memory_gb: record.p95_allocated_memory_gb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::tool_cost::fixtures::record;

    #[test]
    fn tool_response_uses_wire_field_names() {
        let json = serde_json::to_value(ToolResponse::from(record("fastqc", 0.01, 0.02, 0.03)))
            .unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "averageAllocatedMemoryGB",
                "averageCostPerJob",
                "averageJobInputSizeMB",
                "averageJobRuntimeSec",
                "medianAllocatedMemoryGB",
                "medianCostPerJob",
                "medianJobInputSizeMB",
                "medianJobRuntimeSec",
                "numJobs",
                "p95AllocatedMemoryGB",
                "p95CostPerJob",
                "p95JobInputSizeMB",
                "p95JobRuntimeSec",
                "toolId",
            ]
        );
        assert_eq!(json["toolId"], "fastqc");
        assert_eq!(json["averageJobRuntimeSec"], 120);
        assert_eq!(json["p95CostPerJob"], 0.03);
    }

    #[test]
    fn list_params_default_to_none() {
        let params: ListToolsParams = serde_json::from_str("{}").unwrap();
        assert!(params.skip.is_none());
        assert!(params.limit.is_none());
        assert!(params.sort_by.is_none());
        assert!(params.sort_order.is_none());
    }
}

//! Loads the tool catalog from the cost statistics CSV.
//!
//! Loading is all-or-nothing: any unreadable file, missing column, malformed
//! row, negative or non-finite statistic, or duplicate identifier fails the
//! whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::domain::catalog::ToolCostRecord;

use super::{CatalogLoadError, InMemoryToolCatalog};

/// Columns the dataset must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "tool_id",
    "avg_job_cost",
    "median_job_cost",
    "p95_job_cost",
    "avg_runtime_seconds",
    "median_runtime_seconds",
    "p95_runtime_seconds",
    "avg_input_size_mb",
    "median_input_size_mb",
    "p95_input_size_mb",
    "num_jobs",
    "avg_allocated_memory_gb",
    "median_allocated_memory_gb",
    "p95_allocated_memory_gb",
];

/// Raw dataset row. Integer statistics are read as floats because the
/// dataset export writes them as `812.0`.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    tool_id: String,
    avg_job_cost: f64,
    median_job_cost: f64,
    p95_job_cost: f64,
    avg_runtime_seconds: f64,
    median_runtime_seconds: f64,
    p95_runtime_seconds: f64,
    avg_input_size_mb: f64,
    median_input_size_mb: f64,
    p95_input_size_mb: f64,
    num_jobs: f64,
    avg_allocated_memory_gb: f64,
    median_allocated_memory_gb: f64,
    p95_allocated_memory_gb: f64,
}

impl CatalogRow {
    fn statistics(&self) -> [(&'static str, f64); 13] {
        [
            ("avg_job_cost", self.avg_job_cost),
            ("median_job_cost", self.median_job_cost),
            ("p95_job_cost", self.p95_job_cost),
            ("avg_runtime_seconds", self.avg_runtime_seconds),
            ("median_runtime_seconds", self.median_runtime_seconds),
            ("p95_runtime_seconds", self.p95_runtime_seconds),
            ("avg_input_size_mb", self.avg_input_size_mb),
            ("median_input_size_mb", self.median_input_size_mb),
            ("p95_input_size_mb", self.p95_input_size_mb),
            ("num_jobs", self.num_jobs),
            ("avg_allocated_memory_gb", self.avg_allocated_memory_gb),
            ("median_allocated_memory_gb", self.median_allocated_memory_gb),
            ("p95_allocated_memory_gb", self.p95_allocated_memory_gb),
        ]
    }

    fn into_record(self) -> Result<ToolCostRecord, CatalogLoadError> {
        if let Some((column, value)) = self
            .statistics()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(CatalogLoadError::InvalidValue {
                tool_id: self.tool_id,
                column,
                value,
            });
        }

        // Validated non-negative and finite above, so truncation is the only loss.
        Ok(ToolCostRecord {
            average_cost_per_job: self.avg_job_cost,
            median_cost_per_job: self.median_job_cost,
            p95_cost_per_job: self.p95_job_cost,
            average_job_runtime_sec: self.avg_runtime_seconds as u64,
            median_job_runtime_sec: self.median_runtime_seconds as u64,
            p95_job_runtime_sec: self.p95_runtime_seconds as u64,
            average_job_input_size_mb: self.avg_input_size_mb,
            median_job_input_size_mb: self.median_input_size_mb,
            p95_job_input_size_mb: self.p95_input_size_mb,
            num_jobs: self.num_jobs as u64,
            average_allocated_memory_gb: self.avg_allocated_memory_gb,
            median_allocated_memory_gb: self.median_allocated_memory_gb,
            p95_allocated_memory_gb: self.p95_allocated_memory_gb,
            tool_id: self.tool_id,
        })
    }
}

/// Loads the catalog from a CSV file on disk.
pub fn load_catalog(path: &Path) -> Result<InMemoryToolCatalog, CatalogLoadError> {
    let file = File::open(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = load_catalog_from_reader(file)?;
    tracing::info!(
        path = %path.display(),
        tools = catalog.len(),
        "Loaded tool catalog"
    );
    Ok(catalog)
}

/// Loads the catalog from any CSV source.
pub fn load_catalog_from_reader<R: Read>(
    source: R,
) -> Result<InMemoryToolCatalog, CatalogLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(CatalogLoadError::MissingColumn(column));
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<CatalogRow>() {
        records.push(row?.into_record()?);
    }

    for record in &records {
        if record.tool_id.chars().any(char::is_uppercase) {
            tracing::warn!(
                tool_id = %record.tool_id,
                "Tool id is not lowercase; workflow steps can never resolve to it"
            );
        }
    }

    InMemoryToolCatalog::new(records)
}

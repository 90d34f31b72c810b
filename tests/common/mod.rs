//! Shared fixtures for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use serde_json::Value;

use rainstone::adapters::{build_router, load_catalog_from_reader};
use rainstone::config::ServerConfig;
use rainstone::ports::ToolCatalog;

pub const BOUNDARY: &str = "rainstone-test-boundary";

/// Four tools in load order. `bwa_mem` and `hisat2` tie on median cost.
pub const FIXTURE_CSV: &str = "\
tool_id,avg_job_cost,median_job_cost,p95_job_cost,avg_runtime_seconds,median_runtime_seconds,p95_runtime_seconds,avg_input_size_mb,median_input_size_mb,p95_input_size_mb,num_jobs,avg_allocated_memory_gb,median_allocated_memory_gb,p95_allocated_memory_gb
fastqc,0.05,0.04,0.2,95.0,71.0,240.0,310.5,150.2,1200.8,48213.0,4.0,4.0,8.0
bwa_mem,0.5,0.25,2.0,2410.0,1320.0,9050.0,5210.3,3100.1,18230.9,12890.0,16.0,16.0,32.0
multiqc,0.01,0.01,0.02,30.0,22.0,95.0,12.0,8.0,60.0,20411.0,2.0,2.0,4.0
hisat2,0.3,0.25,0.9,1800.0,1500.0,5200.0,4100.0,3900.0,12000.0,8800.0,8.0,8.0,16.0
";

pub fn catalog() -> Arc<dyn ToolCatalog> {
    Arc::new(load_catalog_from_reader(FIXTURE_CSV.as_bytes()).unwrap())
}

pub fn app() -> Router {
    app_with(ServerConfig::default())
}

pub fn app_with(config: ServerConfig) -> Router {
    build_router(catalog(), &config)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Builds a multipart upload with a single file field.
pub fn multipart_upload(uri: &str, field: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"workflow.ga\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/json\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn tool_ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["toolId"].as_str().unwrap().to_string())
        .collect()
}

pub fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod app;
pub mod catalog;
pub mod error;
pub mod workflow;

// Re-export key types for convenience
pub use app::{build_router, WELCOME_MESSAGE};
pub use catalog::{catalog_routes, CatalogAppState};
pub use error::{ApiError, ErrorResponse};
pub use workflow::{workflow_routes, WorkflowAppState};

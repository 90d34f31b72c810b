//! Catalog HTTP adapter module.
//!
//! Provides REST API endpoints for listing and looking up tools.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ListToolsParams, ToolResponse};
pub use handlers::CatalogAppState;
pub use routes::catalog_routes;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - CSV loading and the in-memory `ToolCatalog`
//! - `http` - Axum REST endpoints

pub mod catalog;
pub mod http;

pub use catalog::{load_catalog, load_catalog_from_reader, CatalogLoadError, InMemoryToolCatalog};
pub use http::build_router;

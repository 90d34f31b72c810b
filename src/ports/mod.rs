//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Catalog Ports
//!
//! - `ToolCatalog` - Read access to per-tool cost statistics

mod tool_catalog;

pub use tool_catalog::{CatalogError, ToolCatalog};

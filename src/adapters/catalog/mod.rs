//! Tool catalog adapters.
//!
//! - `csv_loader` - Reads the cost statistics dataset at startup
//! - `InMemoryToolCatalog` - Immutable, indexed implementation of the `ToolCatalog` port

mod csv_loader;
mod error;
mod in_memory;

pub use csv_loader::{load_catalog, load_catalog_from_reader, REQUIRED_COLUMNS};
pub use error::CatalogLoadError;
pub use in_memory::InMemoryToolCatalog;

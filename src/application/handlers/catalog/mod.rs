//! Catalog query handlers.
//!
//! Read-only handlers over the tool cost catalog.

mod get_tool;
mod list_tools;

pub use get_tool::{GetToolError, GetToolHandler, GetToolQuery, GetToolResult};
pub use list_tools::{ListToolsHandler, ListToolsQuery, ListToolsResult};

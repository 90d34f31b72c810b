//! Catalog load errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent the tool catalog from loading at startup
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to open tool catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed tool catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("Tool catalog is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid {column} for tool '{tool_id}': {value}")]
    InvalidValue {
        tool_id: String,
        column: &'static str,
        value: f64,
    },

    #[error("Duplicate tool id in catalog: {0}")]
    DuplicateToolId(String),
}

//! In-memory tool catalog.
//!
//! Holds every record in load order plus an identifier index. The table is
//! immutable after construction and is shared across request handlers
//! behind an `Arc`, so reads need no locking.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::catalog::{ToolCostRecord, ToolListing};
use crate::ports::{CatalogError, ToolCatalog};

use super::CatalogLoadError;

/// Immutable, indexed tool catalog.
#[derive(Debug, Default)]
pub struct InMemoryToolCatalog {
    records: Vec<ToolCostRecord>,
    index: HashMap<String, usize>,
}

impl InMemoryToolCatalog {
    /// Builds a catalog from records in load order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateToolId` if two records share an identifier.
    pub fn new(records: Vec<ToolCostRecord>) -> Result<Self, CatalogLoadError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.tool_id.clone(), position).is_some() {
                return Err(CatalogLoadError::DuplicateToolId(record.tool_id.clone()));
            }
        }
        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in load order.
    pub fn records(&self) -> &[ToolCostRecord] {
        &self.records
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, tool_id: &str) -> Option<&ToolCostRecord> {
        self.index.get(tool_id).map(|&position| &self.records[position])
    }
}

#[async_trait]
impl ToolCatalog for InMemoryToolCatalog {
    async fn list(&self, listing: &ToolListing) -> Result<Vec<ToolCostRecord>, CatalogError> {
        Ok(listing.apply(&self.records))
    }

    async fn find(&self, tool_id: &str) -> Result<Option<ToolCostRecord>, CatalogError> {
        Ok(self.get(tool_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::tool_cost::fixtures::record;
    use crate::domain::catalog::{CostField, SortOrder};

    fn catalog() -> InMemoryToolCatalog {
        InMemoryToolCatalog::new(vec![
            record("hisat2", 0.30, 0.25, 0.90),
            record("fastqc", 0.05, 0.04, 0.20),
            record("multiqc", 0.01, 0.01, 0.02),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let result = InMemoryToolCatalog::new(vec![
            record("fastqc", 0.05, 0.04, 0.20),
            record("fastqc", 0.06, 0.05, 0.21),
        ]);
        assert!(matches!(result, Err(CatalogLoadError::DuplicateToolId(id)) if id == "fastqc"));
    }

    #[test]
    fn get_is_case_sensitive() {
        let catalog = catalog();
        assert_eq!(catalog.get("fastqc").map(|r| r.tool_id.as_str()), Some("fastqc"));
        assert!(catalog.get("FastQC").is_none());
        assert!(catalog.get("fastqc ").is_none());
    }

    #[test]
    fn records_keep_load_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.records().iter().map(|r| r.tool_id.as_str()).collect();
        assert_eq!(ids, vec!["hisat2", "fastqc", "multiqc"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[tokio::test]
    async fn list_applies_sort_and_window() {
        let catalog = catalog();
        let listing = ToolListing::new(CostField::Average, SortOrder::Descending, 1, 5).unwrap();

        let page = catalog.list(&listing).await.unwrap();
        let ids: Vec<&str> = page.iter().map(|r| r.tool_id.as_str()).collect();
        assert_eq!(ids, vec!["fastqc", "multiqc"]);
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let catalog = catalog();
        let listing = ToolListing::default();

        assert_eq!(
            catalog.list(&listing).await.unwrap(),
            catalog.list(&listing).await.unwrap()
        );
        assert_eq!(
            catalog.find("hisat2").await.unwrap(),
            catalog.find("hisat2").await.unwrap()
        );
        assert!(catalog.find("unknown").await.unwrap().is_none());
    }
}

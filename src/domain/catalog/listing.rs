//! Sorting and pagination rules for catalog listings.
//!
//! Unknown sort fields and sort orders are normalized rather than rejected.
//! The only hard rule is the page size ceiling: no caller can ask for more
//! than [`MAX_PAGE_SIZE`] records in one listing.

use std::cmp::Ordering;

use thiserror::Error;

use super::tool_cost::ToolCostRecord;

/// Largest number of records a single listing may return.
pub const MAX_PAGE_SIZE: usize = 500;

/// Cost statistic a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostField {
    #[default]
    Average,
    Median,
    P95,
}

impl CostField {
    /// Resolves a `sort_by` query value. Anything unrecognized sorts by
    /// average cost.
    pub fn from_param(value: &str) -> Self {
        match value {
            "medianCostPerJob" => CostField::Median,
            "p95CostPerJob" => CostField::P95,
            _ => CostField::Average,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CostField::Average => "averageCostPerJob",
            CostField::Median => "medianCostPerJob",
            CostField::P95 => "p95CostPerJob",
        }
    }
}

/// Direction of a listing sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Resolves a `sort_order` query value, case-insensitively. Only `desc`
    /// sorts descending.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Errors raised when building a listing request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("limit must be between 1 and {max}, got {actual}")]
    LimitOutOfRange { max: usize, actual: usize },
}

/// A validated listing request: sort key, direction and page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolListing {
    sort_by: CostField,
    order: SortOrder,
    skip: usize,
    limit: usize,
}

impl ToolListing {
    pub fn new(
        sort_by: CostField,
        order: SortOrder,
        skip: usize,
        limit: usize,
    ) -> Result<Self, ListingError> {
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(ListingError::LimitOutOfRange {
                max: MAX_PAGE_SIZE,
                actual: limit,
            });
        }
        Ok(Self {
            sort_by,
            order,
            skip,
            limit,
        })
    }

    pub fn sort_by(&self) -> CostField {
        self.sort_by
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Sorts `records` and returns the `[skip, skip + limit)` window.
    ///
    /// The sort is stable in both directions: records with equal keys keep
    /// their relative input order. A `skip` past the end yields an empty page.
    pub fn apply(&self, records: &[ToolCostRecord]) -> Vec<ToolCostRecord> {
        let mut sorted: Vec<&ToolCostRecord> = records.iter().collect();
        let field = self.sort_by;

        match self.order {
            SortOrder::Ascending => {
                sorted.sort_by(|a, b| compare_cost(a.cost(field), b.cost(field)))
            }
            SortOrder::Descending => {
                sorted.sort_by(|a, b| compare_cost(b.cost(field), a.cost(field)))
            }
        }

        sorted
            .into_iter()
            .skip(self.skip)
            .take(self.limit)
            .cloned()
            .collect()
    }
}

impl Default for ToolListing {
    fn default() -> Self {
        Self {
            sort_by: CostField::default(),
            order: SortOrder::default(),
            skip: 0,
            limit: MAX_PAGE_SIZE,
        }
    }
}

fn compare_cost(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

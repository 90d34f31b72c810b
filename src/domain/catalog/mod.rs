//! Tool cost catalog: per-tool statistics and listing rules.

pub mod listing;
pub mod tool_cost;

pub use listing::{CostField, ListingError, SortOrder, ToolListing, MAX_PAGE_SIZE};
pub use tool_cost::ToolCostRecord;

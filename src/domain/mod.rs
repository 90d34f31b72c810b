//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `catalog` - Tool cost records and listing (sort and pagination) rules
//! - `workflow` - Galaxy workflow decoding and cost aggregation

pub mod catalog;
pub mod workflow;

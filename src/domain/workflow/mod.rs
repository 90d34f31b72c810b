//! Galaxy workflow documents and the cost estimates derived from them.

pub mod document;
pub mod estimate;

pub use document::{effective_tool_id, WorkflowDocument, WorkflowError, WorkflowStep};
pub use estimate::CostEstimate;

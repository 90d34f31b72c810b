//! Galaxy workflow document parsing.
//!
//! Only the shape needed for cost estimation is read:
//! `{"steps": {"<step id>": {"tool_id": "<tool>"}, ...}}`. Rejection happens
//! only at the top level. Per-step deviations (a step that is not an object,
//! a missing, non-string or empty `tool_id`) are treated as a step without a
//! tool.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that occur while decoding an uploaded workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Workflow is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Workflow must be a JSON object")]
    NotAnObject,
}

/// Byte order mark written by some editors; ignored before decoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A single workflow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    pub step_id: String,
    /// Raw `tool_id` as written in the document, if the step names a tool.
    pub tool_id: Option<String>,
}

/// The steps of a workflow, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowDocument {
    steps: Vec<WorkflowStep>,
}

impl WorkflowDocument {
    /// Decodes a workflow from raw upload bytes.
    ///
    /// # Errors
    ///
    /// - `InvalidJson` if the bytes are not a JSON document
    /// - `NotAnObject` if the top-level value is not a JSON object
    pub fn from_slice(bytes: &[u8]) -> Result<Self, WorkflowError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let value: Value = serde_json::from_slice(bytes)?;
        let root = value.as_object().ok_or(WorkflowError::NotAnObject)?;

        let steps = match root.get("steps") {
            Some(Value::Object(steps)) => parse_steps(steps),
            _ => Vec::new(),
        };

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    /// Catalog identifiers referenced by the workflow, one per step that names
    /// a tool, in step order. Duplicates are kept.
    pub fn tool_references(&self) -> impl Iterator<Item = String> + '_ {
        self.steps
            .iter()
            .filter_map(|step| step.tool_id.as_deref())
            .map(effective_tool_id)
    }
}

fn parse_steps(steps: &Map<String, Value>) -> Vec<WorkflowStep> {
    steps
        .iter()
        .map(|(step_id, step)| WorkflowStep {
            step_id: step_id.clone(),
            tool_id: step
                .get("tool_id")
                .and_then(Value::as_str)
                .filter(|tool_id| !tool_id.is_empty())
                .map(str::to_string),
        })
        .collect()
}

/// Reduces a workflow `tool_id` to its catalog identifier.
///
/// Tool shed identifiers look like
/// `toolshed.g2.bx.psu.edu/repos/<owner>/<repo>/<tool>/<version>`; the
/// second-to-last segment names the tool. Built-in tools have a single
/// segment, which is used as-is. The result is lower-cased.
pub fn effective_tool_id(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').collect();
    let tool = if segments.len() > 1 {
        segments[segments.len() - 2]
    } else {
        segments[0]
    };
    tool.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_id_takes_second_to_last_segment() {
        assert_eq!(
            effective_tool_id("toolshed.g2.bx.psu.edu/repos/devteam/bwa/bwa_mem/0.7.17.2"),
            "bwa_mem"
        );
        assert_eq!(effective_tool_id("repo/FastQC/0.73"), "fastqc");
    }

    #[test]
    fn effective_id_of_single_segment_is_lowercased() {
        assert_eq!(effective_tool_id("Cut1"), "cut1");
        assert_eq!(effective_tool_id("unknown_tool_xyz"), "unknown_tool_xyz");
    }

    #[test]
    fn effective_id_with_trailing_slash() {
        assert_eq!(effective_tool_id("repos/owner/multiqc/"), "multiqc");
        assert_eq!(effective_tool_id("/"), "");
    }

    #[test]
    fn parses_steps_in_document_order() {
        let doc = WorkflowDocument::from_slice(
            br#"{"steps": {
                "10": {"tool_id": "repos/x/y/zeta/1.0"},
                "2": {"tool_id": "alpha"},
                "0": {"tool_id": "repos/x/y/mid/2.1"}
            }}"#,
        )
        .unwrap();

        let refs: Vec<String> = doc.tool_references().collect();
        assert_eq!(refs, vec!["zeta", "alpha", "mid"]);
        assert_eq!(doc.steps()[0].step_id, "10");
    }

    #[test]
    fn steps_without_a_usable_tool_id_are_skipped() {
        let doc = WorkflowDocument::from_slice(
            br#"{"steps": {
                "0": {"type": "data_input"},
                "1": {"tool_id": null},
                "2": {"tool_id": ""},
                "3": {"tool_id": 42},
                "4": "not a step",
                "5": {"tool_id": "sort1"}
            }}"#,
        )
        .unwrap();

        assert_eq!(doc.steps().len(), 6);
        let refs: Vec<String> = doc.tool_references().collect();
        assert_eq!(refs, vec!["sort1"]);
    }

    #[test]
    fn missing_or_malformed_steps_yield_no_steps() {
        for body in [
            r#"{}"#,
            r#"{"steps": {}}"#,
            r#"{"steps": []}"#,
            r#"{"steps": "nope"}"#,
            r#"{"name": "wf", "steps": null}"#,
        ] {
            let doc = WorkflowDocument::from_slice(body.as_bytes()).unwrap();
            assert!(doc.steps().is_empty(), "expected no steps for {body}");
        }
    }

    #[test]
    fn non_json_is_rejected() {
        let result = WorkflowDocument::from_slice(b"this is not json");
        assert!(matches!(result, Err(WorkflowError::InvalidJson(_))));
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let mut body = b"\xEF\xBB\xBF".to_vec();
        body.extend_from_slice(br#"{"steps": {"1": {"tool_id": "fastqc"}}}"#);

        let doc = WorkflowDocument::from_slice(&body).unwrap();
        assert_eq!(doc.tool_references().collect::<Vec<_>>(), vec!["fastqc"]);
    }

    #[test]
    fn byte_order_mark_alone_is_not_json() {
        let result = WorkflowDocument::from_slice(b"\xEF\xBB\xBF");
        assert!(matches!(result, Err(WorkflowError::InvalidJson(_))));
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        let result = WorkflowDocument::from_slice(b"[1, 2, 3]");
        assert!(matches!(result, Err(WorkflowError::NotAnObject)));
    }
}

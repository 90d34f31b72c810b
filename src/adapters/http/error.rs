//! HTTP error mapping.
//!
//! Every failure is rendered as `{"detail": "<message>"}` with the matching
//! status code.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::handlers::catalog::GetToolError;
use crate::application::handlers::workflow::EstimateWorkflowError;
use crate::domain::catalog::ListingError;
use crate::ports::CatalogError;

/// Detail message returned for unknown tool identifiers.
pub const TOOL_NOT_FOUND: &str = "Tool not found";

/// Detail message returned for workflow uploads that cannot be decoded.
pub const INVALID_WORKFLOW_FILE: &str = "Invalid workflow file";

/// Standard error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_detail(self) -> String {
        match self {
            ApiError::BadRequest(detail)
            | ApiError::NotFound(detail)
            | ApiError::PayloadTooLarge(detail)
            | ApiError::Unprocessable(detail)
            | ApiError::Internal(detail) => detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let detail = self.into_detail();
        if status.is_server_error() {
            tracing::error!(%status, %detail, "Request failed");
        } else {
            tracing::debug!(%status, %detail, "Request rejected");
        }
        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl From<ListingError> for ApiError {
    fn from(error: ListingError) -> Self {
        ApiError::Unprocessable(error.to_string())
    }
}

impl From<GetToolError> for ApiError {
    fn from(error: GetToolError) -> Self {
        match error {
            GetToolError::NotFound(_) => ApiError::NotFound(TOOL_NOT_FOUND.to_string()),
            GetToolError::Catalog(error) => error.into(),
        }
    }
}

impl From<EstimateWorkflowError> for ApiError {
    fn from(error: EstimateWorkflowError) -> Self {
        match error {
            EstimateWorkflowError::InvalidInput(_) => {
                ApiError::BadRequest(INVALID_WORKFLOW_FILE.to_string())
            }
            EstimateWorkflowError::Internal(message) => ApiError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workflow::WorkflowError;

    #[test]
    fn test_not_found_uses_fixed_detail() {
        let error: ApiError = GetToolError::NotFound("bwa".to_string()).into();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.into_detail(), "Tool not found");
    }

    #[test]
    fn test_invalid_workflow_is_bad_request() {
        let error: ApiError =
            EstimateWorkflowError::InvalidInput(WorkflowError::NotAnObject).into();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.into_detail(), "Invalid workflow file");
    }

    #[test]
    fn test_internal_error_echoes_message() {
        let error: ApiError = EstimateWorkflowError::Internal("boom".to_string()).into();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.into_detail(), "boom");
    }

    #[test]
    fn test_listing_error_is_unprocessable() {
        let error: ApiError = ListingError::LimitOutOfRange {
            max: 500,
            actual: 900,
        }
        .into();
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("Tool not found")).unwrap();
        assert_eq!(body, serde_json::json!({"detail": "Tool not found"}));
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::services::{ScanError, SolveError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not process image: {0}")]
    ScanFailed(#[from] ScanError),

    #[error("Could not solve cube: {0}")]
    SolveFailed(#[from] SolveError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure reason
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ScanFailed(_) | ApiError::SolveFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facelet_vision::DecodeError;
    use http_body_util::BodyExt;

    #[test]
    fn test_api_error_scan_failed() {
        let error = ApiError::from(ScanError::Decode(DecodeError::EmptyPayload));
        assert!(error
            .to_string()
            .starts_with("Could not process image: "));
    }

    #[test]
    fn test_api_error_solve_failed() {
        let error = ApiError::from(SolveError::Rejected("Error. Probably cubestring is invalid".into()));
        assert_eq!(
            error.to_string(),
            "Could not solve cube: Error. Probably cubestring is invalid"
        );
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("worker crashed".to_string());
        assert_eq!(error.to_string(), "Internal error: worker crashed");
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        // ScanFailed -> BAD_REQUEST
        let response = ApiError::ScanFailed(ScanError::Task("cancelled".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // SolveFailed -> BAD_REQUEST
        let response = ApiError::SolveFailed(SolveError::TimedOut(30)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_has_detail() {
        let response =
            ApiError::SolveFailed(SolveError::Rejected("bad".into())).into_response();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"detail": "Could not solve cube: bad"}));
    }
}

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorResponse};
use crate::services::FaceScanner;

/// Request body for face scanning
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScanFaceRequest {
    /// Base64-encoded JPEG or PNG, optionally with a `data:image/...;base64,` prefix
    pub image: String,
}

/// Sticker codes of one face
#[derive(Debug, Serialize, ToSchema)]
pub struct ScanFaceResponse {
    /// Nine facelet codes (U, R, F, D, L, B), row-major from the top-left sticker
    pub colors: Vec<String>,
}

/// Scan one cube face
///
/// Decodes the photo, locates the nine stickers and classifies each one by
/// color. The face is expected to fill roughly the middle half of the frame.
#[utoipa::path(
    post,
    path = "/scan-face",
    request_body = ScanFaceRequest,
    responses(
        (status = 200, description = "Nine sticker codes", body = ScanFaceResponse),
        (status = 400, description = "Image could not be decoded", body = ErrorResponse),
    ),
    tag = "Scan"
)]
pub async fn handle_scan_face(
    State(scanner): State<Arc<FaceScanner>>,
    Json(request): Json<ScanFaceRequest>,
) -> Result<Json<ScanFaceResponse>, ApiError> {
    let outcome = scanner.scan_base64(request.image).await.map_err(|e| {
        tracing::warn!(%e, "Face scan failed");
        ApiError::from(e)
    })?;

    tracing::info!(
        source = ?outcome.source,
        colors = %outcome.scan,
        fallback_stickers = outcome.fallback_count(),
        "Face scanned"
    );

    Ok(Json(ScanFaceResponse {
        colors: outcome
            .scan
            .codes()
            .iter()
            .map(|code| code.to_string())
            .collect(),
    }))
}

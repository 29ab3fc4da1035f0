use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

pub const LIVENESS_MESSAGE: &str = "Rubik's Cube Solver API is running";

/// Response from the liveness endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootResponse),
    ),
    tag = "Status"
)]
pub async fn handle_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

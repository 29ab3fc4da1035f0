use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorResponse};
use crate::services::CubeSolver;

/// Request body for solving
#[derive(Debug, Deserialize, ToSchema)]
pub struct SolveRequest {
    /// 54 facelet codes, faces in U, R, F, D, L, B order
    pub definition: String,
}

/// Solver answer
#[derive(Debug, Serialize, ToSchema)]
pub struct SolveResponse {
    /// Moves as one space-separated string
    pub solution: String,
    /// Moves split into individual steps
    pub steps: Vec<String>,
}

/// Solve a cube
///
/// The definition is passed to the solver unchanged; malformed or
/// unsolvable definitions are reported by the solver.
#[utoipa::path(
    post,
    path = "/solve",
    request_body = SolveRequest,
    responses(
        (status = 200, description = "Move sequence", body = SolveResponse),
        (status = 400, description = "Solver rejected the definition", body = ErrorResponse),
    ),
    tag = "Solve"
)]
pub async fn handle_solve(
    State(solver): State<Arc<dyn CubeSolver>>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let solution = solver.solve(&request.definition).await.map_err(|e| {
        tracing::warn!(
            %e,
            definition = %request.definition,
            "Solve failed"
        );
        ApiError::from(e)
    })?;

    tracing::info!(steps = solution.len(), "Cube solved");

    Ok(Json(SolveResponse {
        solution: solution.text().to_string(),
        steps: solution.steps().to_vec(),
    }))
}

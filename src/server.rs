//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::{AppConfig, ConfigError};
use crate::services::{CubeSolver, FaceScanner, ProcessSolver};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub scanner: Arc<FaceScanner>,
    pub solver: Arc<dyn CubeSolver>,
}

/// Create application state with the configured external solver.
pub fn create_app_state(config: AppConfig) -> AppState {
    let solver = Arc::new(ProcessSolver::from_config(&config.solver));
    create_app_state_with_solver(config, solver)
}

/// Create application state around a given solver.
pub fn create_app_state_with_solver(config: AppConfig, solver: Arc<dyn CubeSolver>) -> AppState {
    let scanner = Arc::new(FaceScanner::from_config(&config.scanner));

    AppState {
        config: Arc::new(config),
        scanner,
        solver,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Fails only when the CORS policy in the config cannot be expressed.
pub fn build_router(state: AppState) -> Result<Router, ConfigError> {
    let cors = state.config.cors.layer()?;

    Ok(Router::new()
        .route("/", get(api::handle_root))
        .route("/scan-face", post(handle_scan_face))
        .route("/solve", post(handle_solve))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_scan_face(
    State(state): State<AppState>,
    body: Json<api::ScanFaceRequest>,
) -> Result<Json<api::ScanFaceResponse>, ApiError> {
    api::handle_scan_face(State(state.scanner), body).await
}

async fn handle_solve(
    State(state): State<AppState>,
    body: Json<api::SolveRequest>,
) -> Result<Json<api::SolveResponse>, ApiError> {
    api::handle_solve(State(state.solver), body).await
}

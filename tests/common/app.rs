//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use cubescan::models::AppConfig;
use cubescan::server::{build_router, create_app_state, create_app_state_with_solver, AppState};

use super::stub_solver::StubSolver;

/// Test application with router and direct access to the stub solver
pub struct TestApp {
    router: axum::Router,
    /// Stub behind `/solve`; idle when the app runs the configured solver
    pub solver: Arc<StubSolver>,
}

impl TestApp {
    /// Create a test application with default config and a stub solver
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application from a specific config
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_solver(config, Arc::new(StubSolver::default()))
    }

    /// Create a test application around a prepared stub solver
    pub fn with_solver(config: AppConfig, solver: Arc<StubSolver>) -> Self {
        let state = create_app_state_with_solver(config, solver.clone());

        // Build router using shared server module (same as production)
        let router = build_router(state).expect("Failed to build router");

        Self { router, solver }
    }

    /// Create a test application that runs the configured solver process
    pub fn with_real_solver(config: AppConfig) -> Self {
        let router = build_router(create_app_state(config)).expect("Failed to build router");

        Self {
            router,
            solver: Arc::new(StubSolver::default()),
        }
    }

    /// Create app state for custom router configuration
    pub fn create_state() -> AppState {
        create_app_state_with_solver(AppConfig::default(), Arc::new(StubSolver::default()))
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a GET request with custom headers
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::get(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Make an OPTIONS request with custom headers
    pub async fn options(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::options(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        self.post_raw(path, &body.to_string()).await
    }

    /// Make a POST request with an arbitrary JSON-typed body
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Scan a face and return its codes as one string
    pub async fn scan_face(&self, image: &str) -> String {
        let response = self
            .post_json("/scan-face", &serde_json::json!({ "image": image }))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());

        let json: serde_json::Value = response.json();
        json["colors"]
            .as_array()
            .expect("colors should be an array")
            .iter()
            .map(|c| c.as_str().expect("color should be a string"))
            .collect()
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the app with a controllable clock
//! - Helper functions for request bodies and client headers

pub mod fixtures;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;

use gems_grading_backend::config::Config;
use gems_grading_backend::routes::limits::CLIENT_ID_HEADER;
use gems_grading_backend::services::clock::ManualClock;
use gems_grading_backend::{router, AppState};

/// Test context containing app state and a manual clock.
pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    app: Router,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context allowing `max_requests` per client per `window_secs`.
    pub fn with_rate_limit(max_requests: u32, window_secs: u64) -> Self {
        Self::with_config(Config {
            rate_limit_max_requests: max_requests,
            rate_limit_window: Duration::from_secs(window_secs),
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let state = AppState::new(config, clock.clone());
        let app = router(state.clone());

        Self { state, clock, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server for this context.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Header name and value identifying a client.
    pub fn client_header(client_id: &'static str) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(CLIENT_ID_HEADER),
            HeaderValue::from_static(client_id),
        )
    }
}

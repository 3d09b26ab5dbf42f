pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::clock::{Clock, SystemClock};
use crate::services::error_log::ErrorLog;
use crate::services::rate_limit::RateLimiter;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub limiter: Arc<RateLimiter>,
    pub errors: Arc<ErrorLog>,
}

impl AppState {
    /// Build state from configuration, reading time from `clock`.
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        let limiter = RateLimiter::new(
            clock.clone(),
            config.rate_limit_max_requests,
            config.rate_limit_window,
            config.rate_limit_max_clients,
        );
        let errors = ErrorLog::new(clock, config.error_log_capacity, config.error_log_retention);

        Self {
            config: Arc::new(config),
            limiter: Arc::new(limiter),
            errors: Arc::new(errors),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let limited_routes = Router::new()
        // Grading routes
        .route("/api/grading/check", post(routes::grading::check))
        .route("/api/grading/regrade", post(routes::grading::regrade))
        .route("/api/grading/parts", post(routes::grading::parts))
        .route("/api/grading/similarity", post(routes::grading::similarity))
        // Vocabulary routes
        .route("/api/vocab/validate", post(routes::vocab::validate))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::limits::rate_limit_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/admin/errors", get(routes::admin::errors))
        .merge(limited_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::limits::error_log_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();

    tracing::info!(
        max_requests = config.rate_limit_max_requests,
        window_secs = config.rate_limit_window.as_secs(),
        "Rate limiting enabled"
    );

    let state = AppState::new(config, Arc::new(SystemClock));
    let app = router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

//! HTTP API for the activity registry.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{handle_panic, logging_middleware, rate_limit_middleware, RateLimitState};
pub use types::*;

use activity_registry::{ActivityStore, Registry};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use crate::config::RateLimitConfig;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Activity registry
    pub store: ActivityStore,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: Registry) -> Self {
        Self {
            store: ActivityStore::new(registry),
        }
    }
}

/// Create the API router with the default rate limit.
pub fn create_router(state: AppState) -> Router {
    let rate_limit = RateLimitState::new(RateLimitConfig::default().global_per_minute);
    create_router_with_rate_limit(state, rate_limit)
}

/// Create the API router with custom rate limiting.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:name/signup", post(handlers::signup))
        .route(
            "/activities/:name/participants/:email",
            delete(handlers::remove_participant),
        )
        .layer(axum_middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ))
        // Registered after the rate limit layer, so never throttled
        .route("/health", get(handlers::health))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

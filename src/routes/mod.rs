//! HTTP route handlers.
//!
//! Routes are grouped by caching behavior: the greeting route gets a short
//! public Cache-Control header since its content is fixed for the process
//! lifetime, while the probe routes stay uncached so orchestrators always
//! observe the live process.
//!
//! The permissive CORS layer and the request ID middleware wrap the merged
//! router, so they also apply to the default 404 fallback.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HOME;
use crate::middleware::{cors_layer, request_id_layer};
use crate::state::AppState;

/// Creates the Axum router with all routes, cache headers, and middleware.
pub fn create_router(state: AppState) -> Router {
    // Greeting - moderate cache, constant for the process lifetime
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Probes - no caching, always fresh for liveness and readiness checks
    let probe_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    Router::new()
        .merge(home_routes)
        .merge(probe_routes)
        .with_state(state)
        // Permissive cross-origin headers on every response, preflight included
        .layer(cors_layer())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

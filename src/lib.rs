//! backend-api - a minimal backend HTTP API.
//!
//! Exposes a greeting at the root route (configurable via the `APP_MESSAGE`
//! environment variable) plus liveness and readiness probes, with permissive
//! cross-origin headers on every response. Startup is staggered by a fixed
//! delay before the listener binds.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

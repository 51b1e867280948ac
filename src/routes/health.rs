//! Health and readiness endpoints for container orchestration.
//!
//! `/health` is a liveness probe: it only checks that the process can respond
//! to HTTP. `/ready` signals that this instance is prepared to accept
//! traffic; since the listener only binds after the startup delay, any
//! answered request means the service is ready.

/// Liveness probe handler.
pub async fn health() -> &'static str {
    "OK"
}

/// Readiness probe handler.
pub async fn ready() -> &'static str {
    "Ready"
}

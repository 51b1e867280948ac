//! Handler for the root greeting route.

use axum::extract::State;

use crate::state::AppState;

/// Root route handler.
///
/// Returns the greeting configured at startup via `APP_MESSAGE`, or the
/// built-in default when the variable was unset or empty.
pub async fn index(State(state): State<AppState>) -> String {
    state.config.message.clone()
}

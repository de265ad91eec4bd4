use crate::api::AppState;
use axum::extract::State;

/// Exposes the counter registry as `text/plain`, one `name value` line
/// per counter.
pub async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

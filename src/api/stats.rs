use crate::api::AppState;
use crate::api::schemas::stats::StatsResponse;
use crate::error::Result;
use crate::metrics::counters;
use axum::{Json, extract::State, response::IntoResponse};

/// Returns the corpus-wide aggregate snapshot.
///
/// # Errors
/// Returns `AppError::Database` if the store is unreachable.
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.metrics.increment(counters::STATS_REQUESTS);

    let stats = state.stats_service.stats().await?;

    Ok(Json(StatsResponse::from(stats)))
}

use crate::api::AppState;
use crate::api::schemas::messages::{ListMessagesParams, ListMessagesResponse, MessageView};
use crate::error::Result;
use crate::metrics::counters;
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

/// Lists messages with optional filters and pagination.
///
/// # Errors
/// Returns `AppError::Validation` for out-of-range pagination parameters.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<ListMessagesParams>,
) -> Result<impl IntoResponse> {
    state.metrics.increment(counters::MESSAGES_REQUESTS);

    let ListMessagesParams { limit, offset, from, since, q } = params;
    let (page, total) = state.query_service.list(limit, offset, from, since, q).await?;

    Ok(Json(ListMessagesResponse {
        data: page.into_iter().map(MessageView::from).collect(),
        total,
        limit,
        offset,
    }))
}

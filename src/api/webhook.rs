use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::metrics::counters;
use axum::{Json, body::Bytes, extract::State, http::HeaderMap, response::IntoResponse};
use serde_json::json;

/// Ingests one signed webhook delivery. Both `created` and `duplicate`
/// report the same success shape; the distinction only shows up in the
/// counters and the log line.
///
/// # Errors
/// Returns `AppError::InvalidSignature`, `AppError::Validation`,
/// `AppError::InvalidAddress`, or `AppError::Database` from the pipeline.
pub async fn ingest(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse> {
    state.metrics.increment(counters::WEBHOOK_REQUESTS);

    let signature = headers.get("x-signature").and_then(|v| v.to_str().ok());

    match state.ingest_service.ingest(&body, signature).await {
        Ok(receipt) => {
            if receipt.outcome.is_duplicate() {
                state.metrics.increment(counters::WEBHOOK_DUPLICATES);
            } else {
                state.metrics.increment(counters::WEBHOOK_CREATED);
            }

            tracing::info!(
                message_id = %receipt.message_id,
                result = receipt.outcome.as_str(),
                dup = receipt.outcome.is_duplicate(),
                "webhook processed"
            );

            Ok(Json(json!({ "status": "ok" })))
        }
        Err(e) => {
            match &e {
                AppError::InvalidSignature => {
                    state.metrics.increment(counters::WEBHOOK_INVALID_SIGNATURE);
                }
                AppError::InvalidAddress => {
                    state.metrics.increment(counters::WEBHOOK_INVALID_MSISDN);
                }
                AppError::Validation(_) | AppError::Database(_) | AppError::Internal => {}
            }
            Err(e)
        }
    }
}

//! The prediction endpoint — the only route that runs the full pipeline.

use axum::{Extension, Json};

use crate::api::error::ApiError;
use crate::api::types::{validate_symptoms, ApiContext, PredictRequest, PredictionResponse};

/// Message returned when parsing recognizes none of the entered symptoms.
pub const NO_MATCH_MESSAGE: &str =
    "None of the entered symptoms are recognized. Please check spelling and try again.";

/// `POST /api/v1/predict`
///
/// Validates the raw input, then runs the blocking pipeline (classifier,
/// dataset lookup, optional outbound AI call) off the async runtime.
pub async fn predict(
    Extension(ctx): Extension<ApiContext>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    validate_symptoms(&request.symptoms).map_err(ApiError::BadRequest)?;

    let service = ctx.service.clone();
    let raw = request.symptoms.clone();
    let outcome = tokio::task::spawn_blocking(move || service.predict(&raw))
        .await
        .map_err(|e| ApiError::Internal(format!("prediction task failed: {e}")))?;

    match outcome {
        Some(outcome) => {
            tracing::info!(
                condition = %outcome.condition,
                confidence = outcome.confidence,
                source = outcome.source,
                "prediction served"
            );
            Ok(Json(outcome.into()))
        }
        None => Err(ApiError::BadRequest(NO_MATCH_MESSAGE.to_string())),
    }
}

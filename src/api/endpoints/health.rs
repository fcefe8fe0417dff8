use axum::{Extension, Json};
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config::APP_VERSION;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub classifier: &'static str,
    pub ai_enhancement: &'static str,
}

/// `GET /api/v1/health` — liveness plus per-component mode. Degraded
/// components (fallback classifier, disabled AI) still report "ok"
/// because the pipeline serves requests either way.
pub async fn health(Extension(ctx): Extension<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: APP_VERSION,
        classifier: ctx.service.classifier_kind(),
        ai_enhancement: if ctx.service.ai_enabled() {
            "enabled"
        } else {
            "disabled"
        },
    })
}

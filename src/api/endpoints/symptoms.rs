use axum::{Extension, Json};
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::vocabulary::SymptomEntry;

#[derive(Debug, Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<SymptomEntry>,
    pub count: usize,
}

/// `GET /api/v1/symptoms` — the recognized vocabulary, sorted by name.
pub async fn list_symptoms(Extension(ctx): Extension<ApiContext>) -> Json<SymptomsResponse> {
    let symptoms = ctx.service.symptoms();
    let count = symptoms.len();
    Json(SymptomsResponse { symptoms, count })
}

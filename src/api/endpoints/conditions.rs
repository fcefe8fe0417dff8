use axum::{Extension, Json};
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::registry::ConditionEntry;

#[derive(Debug, Serialize)]
pub struct ConditionsResponse {
    pub conditions: Vec<ConditionEntry>,
    pub count: usize,
}

/// `GET /api/v1/conditions` — every condition the classifier can emit,
/// sorted by name.
pub async fn list_conditions(Extension(ctx): Extension<ApiContext>) -> Json<ConditionsResponse> {
    let conditions = ctx.service.conditions();
    let count = conditions.len();
    Json(ConditionsResponse { conditions, count })
}

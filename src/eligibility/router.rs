use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tracing::warn;

use super::domain::CustomerProfile;
use super::report::EligibilityReport;
use super::EligibilityEngine;
use crate::error::AppError;

/// Router exposing the evaluation endpoint.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/evaluate", post(evaluate_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Json(profile): Json<CustomerProfile>,
) -> Result<Json<EligibilityReport>, AppError> {
    let report = engine.evaluate_checked(&profile).map_err(|error| {
        warn!(%error, "rejected malformed customer profile");
        AppError::from(error)
    })?;

    Ok(Json(report))
}

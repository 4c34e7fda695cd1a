use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    dataset: DatasetSummary,
}

#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    observations: usize,
    stations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_date: Option<String>,
}

/// GET /healthz - Liveness probe
///
/// The dataset is loaded before the listener binds, so a running process
/// is always able to answer queries.
pub async fn liveness_check(State(state): State<AppState>) -> impl IntoResponse {
    let store = &state.store;
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        dataset: DatasetSummary {
            observations: store.observations().len(),
            stations: store.stations().len(),
            latest_date: store.latest_date().map(str::to_string),
        },
    };

    (StatusCode::OK, Json(response))
}

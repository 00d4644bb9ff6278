use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};
use std::collections::HashMap;

use crate::api::errors::ApiError;
use crate::core::metrics;
use crate::core::state::AppState;
use crate::schemas::{HealthResponse, RootResponse};

pub(crate) async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let response = RootResponse {
        message: state.settings().api().project_name.clone(),
        version: state.settings().api().version.clone(),
        docs_url: format!("{}/reports/template", state.settings().api().api_v1_str),
    };

    Json(response)
}

/// There are no backing services, so health only reports the evaluator limits in use.
pub(crate) async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = state.settings().report();
    let mut components = HashMap::new();
    components.insert("evaluator".to_string(), "healthy".to_string());
    components.insert("max_subjects".to_string(), report.max_subjects.to_string());

    Json(HealthResponse {
        service: "gradecard-api".to_string(),
        status: "healthy".to_string(),
        components,
    })
}

pub(crate) async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    if !state.settings().telemetry().prometheus_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }

    match metrics::render() {
        Some(body) => ([(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
            .into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

pub(crate) async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

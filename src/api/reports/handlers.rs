use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::validation::validate_subject_count;
use crate::core::metrics;
use crate::core::state::AppState;
use crate::core::time::now_utc_rfc3339;
use crate::schemas::report::{ReportRequest, ReportResponse, TemplateQuery, TemplateResponse};
use crate::services::grading;
use crate::services::report_view::ReportView;

pub(super) async fn generate_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReportResponse>), ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;
    validate_subject_count(payload.subjects.len(), state.settings().report().max_subjects)?;

    let report = grading::compute_report(payload.into_input())?;
    metrics::record_report(&report);

    tracing::info!(
        subjects = report.scores.len(),
        percentage = report.percentage,
        grade = report.grade.letter(),
        passed = report.passed,
        "Report generated"
    );

    let view = ReportView::from_report(&report);
    let response = ReportResponse { generated_at: now_utc_rfc3339(), report, view };
    Ok((StatusCode::CREATED, Json(response)))
}

pub(super) async fn subject_template(
    State(state): State<AppState>,
    query: Result<Query<TemplateQuery>, QueryRejection>,
) -> Result<Json<TemplateResponse>, ApiError> {
    let Query(query) = query?;
    let limits = state.settings().report();
    let count = query.subject_count.unwrap_or(limits.default_subjects);
    validate_subject_count(count, limits.max_subjects)?;

    let scores = grading::subject_template(count)?;
    Ok(Json(TemplateResponse::from_scores(scores, limits.max_subjects)))
}

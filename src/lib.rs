pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod schemas;
pub(crate) mod services;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use validator::Validate;

use crate::core::{config::Settings, state::AppState, telemetry};
use crate::schemas::report::ReportRequest;
use crate::services::{grading, report_view::ReportView};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let state = AppState::new(settings);
    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        max_subjects = state.settings().report().max_subjects,
        "Gradecard API listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await?;

    Ok(())
}

/// Evaluates a JSON `ReportRequest` offline and renders the plain-text report card.
pub fn render_text_report(payload: &str) -> anyhow::Result<String> {
    let request: ReportRequest =
        serde_json::from_str(payload).context("Invalid report request JSON")?;
    request.validate().context("Invalid report request")?;

    let report = grading::compute_report(request.into_input())?;
    Ok(ReportView::from_report(&report).render_text())
}

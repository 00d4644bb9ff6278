use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config::Settings;

pub(crate) fn init_tracing(settings: &Settings) -> anyhow::Result<()> {
    let filter = log_filter(&settings.telemetry().log_level);
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(fmt::format::FmtSpan::CLOSE);

    let installed =
        if settings.telemetry().json { builder.json().try_init() } else { builder.try_init() };
    installed.map_err(|err| anyhow::anyhow!(err.to_string()))?;

    tracing::debug!(
        json = settings.telemetry().json,
        level = %settings.telemetry().log_level,
        "tracing initialized"
    );
    Ok(())
}

/// `RUST_LOG` wins over the configured level; an unparsable level falls back to `info`.
fn log_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

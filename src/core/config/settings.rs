use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_cors_origins, parse_environment, parse_usize,
};
use super::types::{
    ApiSettings, ConfigError, CorsSettings, ReportSettings, RuntimeSettings, ServerHost,
    ServerPort, ServerSettings, Settings, TelemetrySettings,
};
use crate::services::grading::MAX_SUBJECTS;

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let host = env_or_default("GRADECARD_HOST", "0.0.0.0");
        let port = env_or_default("GRADECARD_PORT", "8000");

        let environment = parse_environment(
            env_optional("GRADECARD_ENV").or_else(|| env_optional("ENVIRONMENT")),
        );
        let strict_config = env_optional("GRADECARD_STRICT_CONFIG")
            .map(|value| parse_bool(&value))
            .unwrap_or(false)
            || environment.is_production();

        let project_name = env_or_default("PROJECT_NAME", "Gradecard API");
        let version = env_or_default("VERSION", env!("CARGO_PKG_VERSION"));
        let api_v1_str = env_or_default("API_V1_STR", "/api/v1");

        let cors_origins = parse_cors_origins(env_optional("BACKEND_CORS_ORIGINS"))?;

        let max_subjects = parse_usize(
            "REPORT_MAX_SUBJECTS",
            env_or_default("REPORT_MAX_SUBJECTS", &MAX_SUBJECTS.to_string()),
        )?;
        let default_subjects =
            parse_usize("REPORT_DEFAULT_SUBJECTS", env_or_default("REPORT_DEFAULT_SUBJECTS", "5"))?;

        let log_level = env_or_default("GRADECARD_LOG_LEVEL", "info");
        let json = env_optional("GRADECARD_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);
        let prometheus_enabled =
            env_optional("PROMETHEUS_ENABLED").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            server: ServerSettings {
                host: ServerHost::parse(host)?,
                port: ServerPort::parse(port)?,
            },
            runtime: RuntimeSettings { environment, strict_config },
            api: ApiSettings { project_name, version, api_v1_str },
            cors: CorsSettings { origins: cors_origins },
            report: ReportSettings { max_subjects, default_subjects },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn report(&self) -> &ReportSettings {
        &self.report
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.report.max_subjects == 0 || self.report.max_subjects > MAX_SUBJECTS {
            return Err(ConfigError::InvalidValue {
                field: "REPORT_MAX_SUBJECTS",
                value: self.report.max_subjects.to_string(),
            });
        }

        if self.report.default_subjects == 0
            || self.report.default_subjects > self.report.max_subjects
        {
            return Err(ConfigError::InvalidValue {
                field: "REPORT_DEFAULT_SUBJECTS",
                value: self.report.default_subjects.to_string(),
            });
        }

        if !self.api.api_v1_str.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "API_V1_STR",
                value: self.api.api_v1_str.clone(),
            });
        }

        if !(self.runtime.strict_config || self.runtime.environment.is_production()) {
            return Ok(());
        }

        if self.cors.origins.iter().any(|origin| origin == "*") {
            return Err(ConfigError::InvalidCors("*".to_string()));
        }

        Ok(())
    }
}

use std::sync::{Arc, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    Router,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::api;
use crate::core::{config::Settings, state::AppState};

const CONFIG_VARS: &[&str] = &[
    "GRADECARD_HOST",
    "GRADECARD_PORT",
    "GRADECARD_STRICT_CONFIG",
    "ENVIRONMENT",
    "PROJECT_NAME",
    "VERSION",
    "API_V1_STR",
    "BACKEND_CORS_ORIGINS",
    "REPORT_MAX_SUBJECTS",
    "REPORT_DEFAULT_SUBJECTS",
    "GRADECARD_LOG_JSON",
];

pub(crate) struct TestContext {
    pub(crate) app: Router,
    _guard: OwnedMutexGuard<()>,
}

pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

/// Resets every variable `Settings::load` reads so each test starts from the defaults.
pub(crate) fn set_test_env() {
    for key in CONFIG_VARS {
        std::env::remove_var(key);
    }
    std::env::set_var("GRADECARD_ENV", "test");
    std::env::set_var("GRADECARD_LOG_LEVEL", "warn");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
}

pub(crate) async fn setup_test_context() -> TestContext {
    setup_test_context_with(&[]).await
}

pub(crate) async fn setup_test_context_with(overrides: &[(&str, &str)]) -> TestContext {
    let guard = env_lock().await;
    set_test_env();
    for (key, value) in overrides {
        std::env::set_var(key, value);
    }

    let settings = Settings::load().expect("settings");
    for (key, _) in overrides {
        std::env::remove_var(key);
    }

    let app = api::router::router(AppState::new(settings));
    TestContext { app, _guard: guard }
}

pub(crate) fn json_request(
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(body) = body {
        let bytes = serde_json::to_vec(&body).expect("serialize body");
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .expect("request body")
    } else {
        builder.body(Body::empty()).expect("request body")
    }
}

pub(crate) async fn read_json(response: axum::response::Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("response body");
    serde_json::from_slice(&body).unwrap_or_else(|err| {
        let body_text = String::from_utf8_lossy(&body);
        panic!("json parse: {err}; body: {body_text}");
    })
}

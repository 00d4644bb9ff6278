use std::sync::Arc;

use crate::core::config::Settings;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
}

impl AppState {
    pub(crate) fn new(settings: Settings) -> Self {
        Self { inner: Arc::new(InnerState { settings }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }
}

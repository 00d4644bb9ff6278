mod handlers;


use axum::{routing::get, routing::post, Router};

use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::generate_report))
        .route("/template", get(handlers::subject_template))
}

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::employees::use_cases::get_employee_by_id::inbound::http as get_employee_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rest/api/employee/list/{id}", get(get_employee_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

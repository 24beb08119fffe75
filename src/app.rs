use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/catalog", get(handlers::get_catalog))
        .route("/api/week", get(handlers::get_week))
        .route("/api/log", post(handlers::update_log))
        .route("/api/insight", post(handlers::get_insight))
        .with_state(state)
}

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks/:id/toggle", post(handlers::toggle_task_form))
        .route("/log", post(handlers::save_log_form))
        .route("/api/today", get(handlers::get_today))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/rankings", get(handlers::get_rankings))
        .route("/api/history", get(handlers::get_history))
        .route("/api/catalog", get(handlers::get_catalog))
        .route("/api/tasks/toggle", post(handlers::toggle_task))
        .route("/api/log", post(handlers::save_log))
        .route("/api/date", put(handlers::select_date))
        .with_state(state)
}

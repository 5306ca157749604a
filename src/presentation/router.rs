// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    clear_history, command_history, enter_session, health_check, issue_command, list_sols,
    robot_panel, sol_detail,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/sols", get(list_sols))
        .route("/sols/:sol", get(sol_detail))
        .route("/robot", get(robot_panel))
        .route("/robot/session", post(enter_session))
        .route("/robot/commands/:command", post(issue_command))
        .route("/robot/history", get(command_history).delete(clear_history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

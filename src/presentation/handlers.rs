// HTTP request handlers
use crate::domain::command::RobotCommand;
use crate::error::ControlError;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::views::{
    CommandOutcomeView, ErrorView, HistoryView, RobotView, SolDetailView, SolSummaryView,
};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

async fn respond<T: Serialize>(status: StatusCode, data: &T, headers: &HeaderMap) -> Response {
    match json_response(status, data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all sols, newest first
pub async fn list_sols(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    match state.weather_service.list_sols().await {
        Ok(records) => {
            let views: Vec<SolSummaryView> = records.iter().map(SolSummaryView::from).collect();
            respond(StatusCode::OK, &views, &headers).await
        }
        Err(e) => {
            tracing::error!("Error fetching weather: {}", e);
            respond(StatusCode::BAD_GATEWAY, &ErrorView::new(e), &headers).await
        }
    }
}

/// Detail of one sol, from a fresh fetch
pub async fn sol_detail(
    Path(sol): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.weather_service.find_sol(&sol).await {
        Ok(Some(record)) => respond(StatusCode::OK, &SolDetailView::from(&record), &headers).await,
        Ok(None) => {
            let error = ErrorView::new(format!("Sol {} introuvable", sol));
            respond(StatusCode::NOT_FOUND, &error, &headers).await
        }
        Err(e) => {
            tracing::error!("Error fetching weather for sol {}: {}", sol, e);
            respond(StatusCode::BAD_GATEWAY, &ErrorView::new(e), &headers).await
        }
    }
}

async fn history_count(state: &AppState) -> usize {
    match state.robot_service.history().await {
        Ok(history) => history.len(),
        Err(e) => {
            tracing::error!("Error reading command history: {}", e);
            0
        }
    }
}

/// Current robot panel
pub async fn robot_panel(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let robot = state.robot_service.state().await;
    let view = RobotView::new(&robot, history_count(&state).await);
    respond(StatusCode::OK, &view, &headers).await
}

/// Re-run the connectivity probe and pick live or simulated transport
pub async fn enter_session(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let robot = state.robot_service.enter_session().await;
    let view = RobotView::new(&robot, history_count(&state).await);
    respond(StatusCode::OK, &view, &headers).await
}

/// Issue one robot command
pub async fn issue_command(
    Path(name): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let command = match name.parse::<RobotCommand>() {
        Ok(command) => command,
        Err(e) => return respond(StatusCode::BAD_REQUEST, &ErrorView::new(e), &headers).await,
    };

    match state.robot_service.issue(command).await {
        Ok(outcome) => {
            respond(StatusCode::OK, &CommandOutcomeView::from(&outcome), &headers).await
        }
        Err(e @ ControlError::NotConnected) => {
            respond(StatusCode::SERVICE_UNAVAILABLE, &ErrorView::new(e), &headers).await
        }
        Err(e @ ControlError::Disabled(_)) => {
            respond(StatusCode::CONFLICT, &ErrorView::new(e), &headers).await
        }
    }
}

/// Command history, newest first
pub async fn command_history(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    match state.robot_service.history().await {
        Ok(stored) => respond(StatusCode::OK, &HistoryView::new(&stored), &headers).await,
        Err(e) => {
            tracing::error!("Error reading command history: {}", e);
            respond(StatusCode::INTERNAL_SERVER_ERROR, &ErrorView::new(e), &headers).await
        }
    }
}

pub async fn clear_history(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    match state.robot_service.clear_history().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Error clearing command history: {}", e);
            respond(StatusCode::INTERNAL_SERVER_ERROR, &ErrorView::new(e), &headers).await
        }
    }
}

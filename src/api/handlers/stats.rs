use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{ErrorResponse, StatsResponse};
use crate::domain::validate_username;
use crate::errors::ProfileError;
use crate::http::Transport;
use crate::services::lookup::run_lookup;

pub async fn get_user_stats<T: Transport + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Path(handle): Path<String>,
) -> Response {
    let username = match validate_username(&handle) {
        Ok(username) => username,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match run_lookup(&state.client, &username).await {
        Ok(snapshot) => Json(StatsResponse::from_snapshot(&snapshot)).into_response(),
        Err(e) => error_response(status_for(&e), e.to_string()),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn status_for(error: &ProfileError) -> StatusCode {
    match error {
        ProfileError::Upstream(_) => StatusCode::NOT_FOUND,
        ProfileError::Fetch(_) | ProfileError::Malformed(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

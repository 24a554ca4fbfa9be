use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    stats::{get_user_stats, health},
};
use crate::http::Transport;

pub fn create_router<T: Transport + 'static>(state: Arc<AppState<T>>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/users/:handle/stats", get(get_user_stats::<T>))
        .with_state(state)
}

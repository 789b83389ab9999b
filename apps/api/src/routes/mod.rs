pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::menu::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Menu API
        .route("/api/v1/genres", get(handlers::handle_list_genres))
        .route("/api/v1/menu/generate", post(handlers::handle_generate))
        .with_state(state)
}

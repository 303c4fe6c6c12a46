pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::portfolio::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/portfolio/generate",
            post(handlers::handle_generate_portfolio),
        )
        .with_state(state)
}

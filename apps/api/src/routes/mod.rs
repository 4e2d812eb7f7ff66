pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::query::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Reference data
        .route("/api/v1/platforms", get(handlers::handle_list_platforms))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        // JD analysis
        .route("/api/v1/jd/analyze", post(handlers::handle_analyze_jd))
        // Query synthesis
        .route("/api/v1/query/profile", post(handlers::handle_profile_query))
        .route("/api/v1/query/web", post(handlers::handle_web_query))
        .route("/api/v1/query/search-url", post(handlers::handle_search_url))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

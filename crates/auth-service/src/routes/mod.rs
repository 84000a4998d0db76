use crate::handlers::auth_handler::{handle_login, handle_signup, AppState};
use crate::handlers::destinations_handler::handle_list_destinations;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Authentication endpoints
        .route("/api/auth/signup", post(handle_signup))
        .route("/api/auth/login", post(handle_login))
        // Destinations placeholder
        .route("/api/destinations", get(handle_list_destinations))
        // Liveness
        .route("/", get(liveness))
        // The frontend is a browser SPA on a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn liveness() -> &'static str {
    "GlobeTrotter API is running..."
}

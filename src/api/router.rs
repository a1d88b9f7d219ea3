use axum::{http::Method, middleware, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::generate;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/api", generate::create_generate_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Reflect the caller's origin and allow credentials
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

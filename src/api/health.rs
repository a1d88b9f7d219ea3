//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub provider: String,
    pub port: u16,
    pub version: &'static str,
}

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        ok: true,
        provider: state.info.diet_provider.clone(),
        port: state.info.port,
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}

/// GET /live
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            ok: true,
            provider: "auto".to_string(),
            port: 3000,
            version: "0.1.0",
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"ok\":true"));
        assert!(json.contains("\"provider\":\"auto\""));
        assert!(json.contains("\"port\":3000"));
    }
}

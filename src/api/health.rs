use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub buildings: usize,
    pub static_variables: usize,
    pub templates: usize,
    pub generated_emails: usize,
    pub webhook_configured: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        buildings: state.buildings.list().len(),
        static_variables: state.variables.list().len(),
        templates: state.templates.list().len(),
        generated_emails: state.history.len(),
        webhook_configured: state.webhook.is_configured(),
    })
}

// src/routes.rs
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

use crate::handlers::web;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ==================
        // WEB UI ROUTES
        // ==================
        .route("/", get(web::login_page))
        .route("/login", get(web::login_page))
        .route("/login", post(web::login_submit))
        // Stylesheet generated from the configured theme
        .route("/static/css/main.css", get(web::stylesheet))
        // ==================
        // SERVICE ROUTES
        // ==================
        .route("/health", get(health_check))
        .with_state(state)
        .layer(CompressionLayer::new())
}

pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
}

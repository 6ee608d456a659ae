// src/main.rs
mod auth;
mod config;
mod handlers;
mod middleware;
mod models;
mod routes;
mod templates;
mod utils;

use std::sync::Arc;
use std::time::Duration;

use tower_http::trace::TraceLayer;

use crate::auth::simulated::SimulatedAuthenticator;
use crate::auth::Authenticator;
use crate::config::Config;
use crate::models::Credentials;
use crate::routes::create_router;
use crate::templates::theme::Theme;

/// Page-level hook invoked once per successful login with the submitted
/// credentials. The sole integration point for navigation or session logic.
pub type LoginSuccessHandler = Arc<dyn Fn(&Credentials) + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub theme: Theme,
    pub authenticator: Arc<dyn Authenticator>,
    pub on_login_success: Option<LoginSuccessHandler>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .init();

    tracing::info!("🚀 Starting Gatehouse server...");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let theme = match &config.primary_color {
        Some(color) => Theme::default().with_primary(color),
        None => Theme::default(),
    };

    // The simulated authentication round trip; swap for a real service
    // call by replacing this Authenticator.
    let authenticator = Arc::new(SimulatedAuthenticator::new(
        Duration::from_millis(config.submit_delay_ms),
        Credentials {
            username: config.accepted_username.clone(),
            password: config.accepted_password.clone(),
        },
    ));

    let on_login_success: LoginSuccessHandler = Arc::new(|credentials: &Credentials| {
        tracing::info!("Login successful! Welcome, {}.", credentials.username);
    });

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        theme,
        authenticator,
        on_login_success: Some(on_login_success),
    });

    let app = create_router(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::security::security_headers,
        ))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_addr();
    tracing::info!("✅ Gatehouse listening on {}", addr);
    tracing::info!("🌐 Login page: http://{}/login", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

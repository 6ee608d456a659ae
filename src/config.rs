// src/config.rs
use anyhow::{Context, Result};
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub brand: String,
    pub primary_color: Option<String>,
    pub submit_delay_ms: u64,
    pub accepted_username: String,
    pub accepted_password: String,
    pub reset_form_on_success: bool,
    pub password_field_error: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000").parse().context("invalid PORT")?,
            brand: env_or("BRAND_NAME", "Gatehouse"),
            primary_color: std::env::var("PRIMARY_COLOR").ok(),
            submit_delay_ms: env_or("SUBMIT_DELAY_MS", "1500")
                .parse()
                .context("invalid SUBMIT_DELAY_MS")?,
            accepted_username: env_or("ACCEPTED_USERNAME", "testuser"),
            accepted_password: env_or("ACCEPTED_PASSWORD", "password123"),
            reset_form_on_success: env_flag("RESET_FORM_ON_SUCCESS"),
            password_field_error: env_flag("PASSWORD_FIELD_ERROR"),
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid server address")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

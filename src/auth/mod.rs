// src/auth/mod.rs
pub mod simulated;

use axum::async_trait;

use crate::models::Credentials;

/// Result of an authentication attempt. Deliberately coarse: callers never
/// learn whether the username or the password was the wrong half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted,
    Denied,
}

/// Verifies a credential pair. The login flow only talks to this trait, so
/// the simulated check can be swapped for a real service call without
/// touching form logic.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome;
}

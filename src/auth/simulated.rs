// src/auth/simulated.rs
use std::time::Duration;

use axum::async_trait;
use subtle::ConstantTimeEq;

use super::{AuthOutcome, Authenticator};
use crate::models::Credentials;

/// Stand-in for a real authentication service: waits a fixed delay to mimic
/// the network round trip, then accepts exactly one credential pair.
pub struct SimulatedAuthenticator {
    delay: Duration,
    accepted: Credentials,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration, accepted: Credentials) -> Self {
        Self { delay, accepted }
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome {
        tokio::time::sleep(self.delay).await;

        let username_ok = ct_str_eq(&credentials.username, &self.accepted.username);
        let password_ok = ct_str_eq(&credentials.password, &self.accepted.password);

        if username_ok & password_ok {
            AuthOutcome::Granted
        } else {
            AuthOutcome::Denied
        }
    }
}

// ct_eq requires equal-length slices
fn ct_str_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}

//! Credential verification backends.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::AuthConfig;

/// Errors a verifier can raise. A wrong email/password pair is *not* an
/// error; it is `Ok(false)`.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Credential backend unavailable: {0}")]
    Unavailable(String),
}

/// Trait for credential verification backends.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Result<bool, AuthError>;
}

#[async_trait]
impl<V: CredentialVerifier + ?Sized> CredentialVerifier for Arc<V> {
    #[inline]
    async fn verify(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        (**self).verify(email, password).await
    }
}

/// Demo backend: one fixed email/password pair, plain comparison after a
/// simulated round-trip delay.
///
/// No hashing, rate limiting or lockout.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    email: String,
    password: String,
    latency: Duration,
}

impl StaticCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.email, &config.password)
            .with_latency(Duration::from_millis(config.latency_ms))
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let ok = email == self.email && password == self.password;
        debug!(email, ok, "credential check");
        Ok(ok)
    }
}

//! Auth REST client for `POST /register` and `POST /login`.
//!
//! The HTTP layer is injected through `HttpTransport` so the same client
//! runs over `gloo-net` in the browser, `reqwest` in the CLI, and scripted
//! fakes in tests.
//!
//! ERROR HANDLING
//! ==============
//! Only a missing response (transport) or an unusable body (malformed) is an
//! `Err`. A 4xx/5xx with a well-formed body is a `Rejected` outcome, so the
//! caller never has to combine `status` and `success` itself.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::error::AuthError;
use super::types::{AuthResult, LoginCredentials, LoginOutcome, RegisterCredentials, RegisterOutcome};
use crate::config::AppConfig;

pub const REGISTER_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Minimal HTTP capability the auth client needs.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// POST `body` with `Content-Type: application/json` and return the reply.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Transport` when no response was received.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AuthError>;
}

pub struct AuthClient<T> {
    transport: T,
    register_url: String,
    login_url: String,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(transport: T, config: &AppConfig) -> Self {
        Self {
            transport,
            register_url: config.endpoint(REGISTER_PATH),
            login_url: config.endpoint(LOGIN_PATH),
        }
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request never completes or the body is not an `AuthResult`.
    pub async fn register(&self, creds: &RegisterCredentials) -> Result<RegisterOutcome, AuthError> {
        let reply = self.post(&self.register_url, creds).await?;
        let result = AuthResult::parse(reply.status, &reply.body)?;
        Ok(result.into_register_outcome(reply.status))
    }

    /// Sign in and, on success, return the session record to cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the request never completes, the body is not an
    /// `AuthResult`, or a successful answer omits the username.
    pub async fn login(&self, creds: &LoginCredentials) -> Result<LoginOutcome, AuthError> {
        let reply = self.post(&self.login_url, creds).await?;
        let result = AuthResult::parse(reply.status, &reply.body)?;
        result.into_login_outcome(reply.status)
    }

    async fn post<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, AuthError> {
        let body = serde_json::to_string(body).map_err(|e| AuthError::Encode(e.to_string()))?;
        log::debug!("POST {url}");
        let reply = self.transport.post_json(url, body).await?;
        log::debug!("POST {url} -> {}", reply.status);
        Ok(reply)
    }
}

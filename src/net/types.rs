//! Wire DTOs for the `/register` and `/login` exchanges.
//!
//! DESIGN
//! ======
//! Response bodies are parsed into `AuthResult` first and then validated into
//! `RegisterOutcome` / `LoginOutcome`, so callers never inspect raw fields.
//! A body that is not a JSON object, or that claims a successful login
//! without a username, is reported as `AuthError::MalformedResponse`. A JSON
//! object without `success` reads as a failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AuthError;
use crate::state::session::SessionRecord;

/// Body of `POST /register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCredentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server-shaped response body shared by both endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub username: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    /// Backend said no; `message` is its explanation when it gave one.
    Rejected { message: Option<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(SessionRecord),
    Rejected { message: Option<String> },
}

/// `true` for HTTP statuses in `200..=299`.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

impl AuthResult {
    /// Parse a response body regardless of its HTTP status.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` when the body is not a JSON object.
    pub fn parse(status: u16, body: &str) -> Result<Self, AuthError> {
        serde_json::from_str(body).map_err(|e| AuthError::malformed(status, e.to_string()))
    }

    fn accepted(&self, status: u16) -> bool {
        is_success_status(status) && self.success
    }

    fn rejection_message(self) -> Option<String> {
        self.message.filter(|m| !m.trim().is_empty())
    }

    pub fn into_register_outcome(self, status: u16) -> RegisterOutcome {
        if self.accepted(status) {
            RegisterOutcome::Registered
        } else {
            RegisterOutcome::Rejected { message: self.rejection_message() }
        }
    }

    /// Validate a login answer. A missing `isAdmin` reads as `false`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` when the login succeeded but no username came back.
    pub fn into_login_outcome(self, status: u16) -> Result<LoginOutcome, AuthError> {
        if !self.accepted(status) {
            return Ok(LoginOutcome::Rejected { message: self.rejection_message() });
        }
        let username = match self.username {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(AuthError::malformed(status, "successful login without a username")),
        };
        Ok(LoginOutcome::Authenticated(SessionRecord {
            username,
            is_admin: self.is_admin.unwrap_or(false),
        }))
    }
}

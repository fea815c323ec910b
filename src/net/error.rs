//! Failure kinds for auth exchanges.

/// An auth call that did not produce a usable answer.
///
/// Business rejections (`success: false`, 4xx/5xx with a valid body) are not
/// errors; they come back as `Rejected` outcomes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No HTTP response was received (DNS, refused connection, CORS, ...).
    #[error("transport failure: {0}")]
    Transport(String),
    /// A response arrived but its body is not a usable `AuthResult`.
    #[error("malformed response (HTTP {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl AuthError {
    pub(crate) fn malformed(status: u16, reason: impl Into<String>) -> Self {
        Self::MalformedResponse { status, reason: reason.into() }
    }
}

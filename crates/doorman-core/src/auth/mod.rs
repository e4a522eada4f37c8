//! External authentication capability.
//!
//! The identity provider is an opaque collaborator reached over its REST
//! API; this module owns the narrow client surface (sign in, create
//! account) and the error type its failures are reported through.

mod client;

use std::fmt;

use serde::Deserialize;

pub use client::IdentityClient;

/// Message shown when the provider reports a failure without a reason.
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown error";

/// Categories of authentication failures for consistent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// The provider rejected the request (wrong password, known email, ...).
    Provider,
    /// Connection timeout or request timeout.
    Timeout,
    /// Failed to reach the provider or to parse its response.
    Transport,
}

/// An authentication failure with a display-ready message.
///
/// The message is the provider's reported reason verbatim when one is
/// present, otherwise [`DEFAULT_ERROR_MESSAGE`]. It is surfaced inline
/// to the user and never treated as fatal.
#[derive(Debug, Clone)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Builds an error from a non-2xx provider response body.
    ///
    /// Identitytoolkit-style bodies carry `{"error": {"message": "..."}}`;
    /// that message is surfaced unchanged. Anything else gets the default.
    pub fn from_provider_body(body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("error")?
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
        Self::new(AuthErrorKind::Provider, message)
    }

    pub fn timeout() -> Self {
        Self::new(AuthErrorKind::Timeout, "Request timed out")
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AuthError {}

/// Provider-issued identity snapshot for a successful sign-in or sign-up.
///
/// Ephemeral: held only for the duration of the authenticated session on
/// screen. The provider owns all durable user records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Provider-assigned user id.
    pub local_id: String,
    /// Email the account was authenticated with.
    pub email: String,
    /// Short-lived identity token.
    pub id_token: String,
    /// Token lifetime in seconds, as reported by the provider.
    #[serde(default)]
    pub expires_in: Option<String>,
}

//! Effect handler implementations.
//!
//! Pure async functions: the runtime spawns them and sends the returned
//! `UiEvent` to the inbox. Each submission performs exactly one provider
//! call; cancellation races the call via `select!` so a torn-down screen
//! does not pay for a response nobody will read.

use std::sync::Arc;

use doorman_core::auth::IdentityClient;
use tokio_util::sync::CancellationToken;

use crate::events::{AuthUiEvent, UiEvent};

/// Runs a sign-in against the identity provider.
pub async fn sign_in(
    client: Arc<IdentityClient>,
    email: String,
    password: String,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    tracing::debug!("submitting sign-in");
    let call = client.sign_in(&email, &password);
    let result = match cancel {
        Some(token) => tokio::select! {
            () = token.cancelled() => Err("Cancelled".to_string()),
            res = call => res.map_err(|e| e.message),
        },
        None => call.await.map_err(|e| e.message),
    };
    UiEvent::Auth(AuthUiEvent::SignInCompleted { result })
}

/// Runs an account creation against the identity provider.
pub async fn create_account(
    client: Arc<IdentityClient>,
    email: String,
    password: String,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    tracing::debug!("submitting account creation");
    let call = client.create_account(&email, &password);
    let result = match cancel {
        Some(token) => tokio::select! {
            () = token.cancelled() => Err("Cancelled".to_string()),
            res = call => res.map_err(|e| e.message),
        },
        None => call.await.map_err(|e| e.message),
    };
    UiEvent::Auth(AuthUiEvent::CreateAccountCompleted { result })
}

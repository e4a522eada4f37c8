//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn an async sign-in against the identity provider.
    SubmitSignIn {
        task: TaskId,
        email: String,
        password: String,
    },

    /// Spawn an async account creation against the identity provider.
    SubmitCreateAccount {
        task: TaskId,
        email: String,
        password: String,
    },

    /// Cancel an in-progress submission.
    ///
    /// Emitted at screen teardown so a completion cannot land on a
    /// discarded screen. The runtime just calls `token.cancel()`.
    CancelTask { token: Option<CancellationToken> },
}

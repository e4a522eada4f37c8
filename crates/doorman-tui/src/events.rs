//! UI event types.
//!
//! All external inputs (terminal, async submission results) are converted
//! to `UiEvent` before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async operations send events directly to the runtime's event inbox.
//! Submissions use a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`
//!
//! ## Cancellation Convention
//!
//! Cancelable submissions carry a `tokio_util::sync::CancellationToken`:
//! - `TaskStarted` carries the token for the reducer to store
//! - The runtime spawns tasks that `select!` on `token.cancelled()` vs work
//! - Cancellation is initiated via `UiEffect::CancelTask` which calls `token.cancel()`
//! - A completion whose `TaskId` is no longer active is dropped, so a
//!   torn-down screen is never updated

use crossterm::event::Event as CrosstermEvent;
use doorman_core::auth::Session;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Async authentication results.
///
/// Results only; in-flight flags live in `TaskState` and are set by the
/// reducer when the runtime reports `TaskStarted`.
#[derive(Debug)]
pub enum AuthUiEvent {
    /// Sign-in attempt finished (Err carries the display message).
    SignInCompleted { result: Result<Session, String> },

    /// Account creation attempt finished (Err carries the display message).
    CreateAccountCompleted { result: Result<Session, String> },
}

/// Unified event enum for the TUI.
///
/// All inputs to the TUI are converted to this type before processing.
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (for the submission spinner).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// Task lifecycle: runtime started a submission (cancel token optional).
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    /// Task lifecycle: runtime completed a submission (wraps the result event).
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Authentication async results.
    Auth(AuthUiEvent),
}

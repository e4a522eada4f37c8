//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── screen: Screen           (the active destination)
//! │   ├── Login(LoginScreen)       (credential fields, error line)
//! │   ├── Register(RegisterScreen) (profile fields, error line)
//! │   └── Menu(MenuScreen)         (authenticated landing)
//! ├── task_seq: TaskSeq        (submission id generator)
//! └── tasks: Tasks             (submission lifecycle state)
//! ```
//!
//! Form fields are owned by their screen value and dropped on navigation;
//! there is no state shared between destinations.

use crate::common::{TaskSeq, Tasks};
use crate::features::login::LoginScreen;
use crate::features::menu::MenuScreen;
use crate::features::register::RegisterScreen;

/// The three navigation destinations.
///
/// Transitions: Login→Menu (auth success), Login→Register (user request),
/// Register→Menu (auth success), Register→Login (back). No parameters
/// pass between destinations; Menu only receives the session snapshot
/// produced by the provider.
#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Register(RegisterScreen),
    Menu(MenuScreen),
}

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The active screen; owns all of its form state.
    pub screen: Screen,
    /// Submission id sequence.
    pub task_seq: TaskSeq,
    /// Submission lifecycle state.
    pub tasks: Tasks,
    /// Spinner animation frame counter (for in-flight submissions).
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Login(LoginScreen::new()),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

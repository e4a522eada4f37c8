//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state,
//! including the navigation transitions between Login, Register and Menu.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::common::TaskState;
use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::features::login::{self, LoginAction, LoginScreen};
use crate::features::menu::MenuScreen;
use crate::features::register::{self, RegisterAction, RegisterScreen};
use crate::state::{AppState, Screen};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                // Stale completion: the submission was cancelled at screen
                // teardown, its result must not touch the current screen.
                vec![]
            }
        }
        UiEvent::Auth(auth_event) => handle_auth_event(app, auth_event),
    }
}

// ============================================================================
// Auth Result Handling
// ============================================================================

fn handle_auth_event(app: &mut AppState, event: AuthUiEvent) -> Vec<UiEffect> {
    match event {
        AuthUiEvent::SignInCompleted { result } => match result {
            Ok(session) => {
                if matches!(app.screen, Screen::Login(_)) {
                    tracing::info!("sign-in succeeded");
                    app.screen = Screen::Menu(MenuScreen::new(session.email));
                }
                vec![]
            }
            Err(message) => {
                tracing::debug!("sign-in failed: {message}");
                if let Screen::Login(login) = &mut app.screen {
                    login.error = Some(message);
                }
                vec![]
            }
        },
        AuthUiEvent::CreateAccountCompleted { result } => match result {
            Ok(session) => {
                if matches!(app.screen, Screen::Register(_)) {
                    tracing::info!("account created");
                    app.screen = Screen::Menu(MenuScreen::new(session.email));
                }
                vec![]
            }
            Err(message) => {
                tracing::debug!("account creation failed: {message}");
                if let Screen::Register(register) = &mut app.screen {
                    register.error = Some(message);
                }
                vec![]
            }
        },
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            match &mut app.screen {
                Screen::Login(login) => login::handle_paste(login, &text),
                Screen::Register(register) => register::handle_paste(register, &text),
                Screen::Menu(_) => {}
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Per-screen key outcome, lifted out of the screen borrow so navigation
/// can replace `app.screen`.
enum ScreenAction {
    Login(LoginAction),
    Register(RegisterAction),
    MenuQuit,
    None,
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let action = match &mut app.screen {
        Screen::Login(login) => ScreenAction::Login(login::handle_key(login, key)),
        Screen::Register(register) => ScreenAction::Register(register::handle_key(register, key)),
        Screen::Menu(_) => handle_menu_key(key),
    };

    match action {
        ScreenAction::Login(LoginAction::Submit) => submit_sign_in(app),
        ScreenAction::Login(LoginAction::OpenRegister) => {
            // Leaving the login screen tears down any in-flight sign-in.
            let effects = cancel_submission(&mut app.tasks.sign_in);
            app.screen = Screen::Register(RegisterScreen::new());
            effects
        }
        ScreenAction::Login(LoginAction::Quit) => vec![UiEffect::Quit],
        ScreenAction::Register(RegisterAction::Submit) => submit_create_account(app),
        ScreenAction::Register(RegisterAction::Back) => {
            let effects = cancel_submission(&mut app.tasks.create_account);
            app.screen = Screen::Login(LoginScreen::new());
            effects
        }
        ScreenAction::Register(RegisterAction::Quit) => vec![UiEffect::Quit],
        ScreenAction::MenuQuit => vec![UiEffect::Quit],
        ScreenAction::Login(LoginAction::None)
        | ScreenAction::Register(RegisterAction::None)
        | ScreenAction::None => vec![],
    }
}

fn handle_menu_key(key: KeyEvent) -> ScreenAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => ScreenAction::MenuQuit,
        KeyCode::Char('c') if ctrl => ScreenAction::MenuQuit,
        _ => ScreenAction::None,
    }
}

// ============================================================================
// Submission
// ============================================================================

fn submit_sign_in(app: &mut AppState) -> Vec<UiEffect> {
    // In-flight guard: a second Enter while the provider call is
    // outstanding must not produce a second call.
    if app.tasks.sign_in.is_running() {
        return vec![];
    }
    let Screen::Login(login) = &app.screen else {
        return vec![];
    };
    let task = app.task_seq.next_id();
    vec![UiEffect::SubmitSignIn {
        task,
        email: login.email.value().to_string(),
        password: login.password.value().to_string(),
    }]
}

fn submit_create_account(app: &mut AppState) -> Vec<UiEffect> {
    if app.tasks.create_account.is_running() {
        return vec![];
    }
    let Screen::Register(register) = &app.screen else {
        return vec![];
    };
    let task = app.task_seq.next_id();
    vec![UiEffect::SubmitCreateAccount {
        task,
        email: register.email.value().to_string(),
        password: register.password.value().to_string(),
    }]
}

fn cancel_submission(state: &mut TaskState) -> Vec<UiEffect> {
    if !state.is_running() {
        return vec![];
    }
    let token = state.cancel.clone();
    state.clear();
    vec![UiEffect::CancelTask { token }]
}

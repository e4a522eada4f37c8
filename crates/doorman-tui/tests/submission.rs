//! End-to-end submission flow: reducer effect → handler → provider →
//! completion folded back into the reducer.
//!
//! The runtime's spawn/inbox plumbing is exercised by hand here so the
//! provider interaction can be pinned with wiremock.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use doorman_core::auth::IdentityClient;
use doorman_core::config::Config;
use doorman_tui::common::{TaskCompleted, TaskKind, TaskStarted};
use doorman_tui::effects::UiEffect;
use doorman_tui::events::{AuthUiEvent, UiEvent};
use doorman_tui::runtime::handlers;
use doorman_tui::state::{AppState, Screen};
use doorman_tui::update::update;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
    update(
        app,
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
    )
}

fn type_str(app: &mut AppState, s: &str) {
    for ch in s.chars() {
        key(app, KeyCode::Char(ch));
    }
}

fn fill_valid_registration(app: &mut AppState) {
    update(
        app,
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
        ))),
    );
    type_str(app, "a@b.com");
    key(app, KeyCode::Tab);
    type_str(app, "123456");
    key(app, KeyCode::Tab);
    type_str(app, "123456");
    key(app, KeyCode::Tab);
    type_str(app, "Ada");
    key(app, KeyCode::Tab);
    type_str(app, "Lovelace");
    key(app, KeyCode::Tab);
    type_str(app, "25");
}

fn client_for(server: &MockServer) -> Arc<IdentityClient> {
    let config = Config {
        api_base: server.uri(),
        api_key: Some("test-key".to_string()),
        ..Config::default()
    };
    Arc::new(IdentityClient::new(&config).unwrap())
}

fn session_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "localId": "abc123",
        "email": email,
        "idToken": "token-xyz",
        "expiresIn": "3600",
    })
}

/// Drives the submit effect the way the runtime does: TaskStarted, run
/// the handler, wrap the result in TaskCompleted.
async fn drive_submission(app: &mut AppState, client: Arc<IdentityClient>) {
    let effects = key(app, KeyCode::Enter);
    let UiEffect::SubmitCreateAccount {
        task,
        email,
        password,
    } = &effects[0]
    else {
        panic!("expected submit effect, got {effects:?}");
    };
    let task = *task;
    let cancel = Some(CancellationToken::new());

    update(
        app,
        UiEvent::TaskStarted {
            kind: TaskKind::CreateAccount,
            started: TaskStarted {
                id: task,
                cancel: cancel.clone(),
            },
        },
    );

    let result = handlers::create_account(client, email.clone(), password.clone(), cancel).await;

    update(
        app,
        UiEvent::TaskCompleted {
            kind: TaskKind::CreateAccount,
            completed: TaskCompleted {
                id: task,
                result: Box::new(result),
            },
        },
    );
}

#[tokio::test]
async fn valid_registration_makes_exactly_one_provider_call_and_lands_on_menu() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(body_json_string(
            r#"{"email":"a@b.com","password":"123456","returnSecureToken":true}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("a@b.com")))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = AppState::new();
    fill_valid_registration(&mut app);
    drive_submission(&mut app, client_for(&server)).await;

    let Screen::Menu(menu) = &app.screen else {
        panic!("expected menu screen");
    };
    assert_eq!(menu.email, "a@b.com");
    server.verify().await;
}

#[tokio::test]
async fn provider_failure_surfaces_its_message_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 400, "message": "EMAIL_EXISTS"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = AppState::new();
    fill_valid_registration(&mut app);
    drive_submission(&mut app, client_for(&server)).await;

    let Screen::Register(register) = &app.screen else {
        panic!("expected register screen");
    };
    assert_eq!(register.error.as_deref(), Some("EMAIL_EXISTS"));
    server.verify().await;
}

#[tokio::test]
async fn sign_in_success_reaches_menu_from_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("a@b.com")))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = AppState::new();
    type_str(&mut app, "a@b.com");
    key(&mut app, KeyCode::Tab);
    type_str(&mut app, "123456");

    let effects = key(&mut app, KeyCode::Enter);
    let UiEffect::SubmitSignIn {
        task,
        email,
        password,
    } = &effects[0]
    else {
        panic!("expected submit effect");
    };
    let task = *task;

    update(
        &mut app,
        UiEvent::TaskStarted {
            kind: TaskKind::SignIn,
            started: TaskStarted {
                id: task,
                cancel: None,
            },
        },
    );
    let result =
        handlers::sign_in(client_for(&server), email.clone(), password.clone(), None).await;
    update(
        &mut app,
        UiEvent::TaskCompleted {
            kind: TaskKind::SignIn,
            completed: TaskCompleted {
                id: task,
                result: Box::new(result),
            },
        },
    );

    assert!(matches!(app.screen, Screen::Menu(_)));
    server.verify().await;
}

#[tokio::test]
async fn cancelled_submission_reports_cancellation() {
    // No mock mounted: a completed call would fail loudly anyway, but the
    // cancelled token must win the race before any response handling.
    let server = MockServer::start().await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let event = handlers::sign_in(
        client_for(&server),
        "a@b.com".to_string(),
        "123456".to_string(),
        Some(cancel),
    )
    .await;

    let UiEvent::Auth(AuthUiEvent::SignInCompleted { result }) = event else {
        panic!("expected sign-in completion");
    };
    assert_eq!(result.unwrap_err(), "Cancelled");
}

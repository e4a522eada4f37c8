//! Identity provider REST client.

use serde::Serialize;

use crate::auth::{AuthError, AuthErrorKind, Session};
use crate::config::Config;

/// Sign-in endpoint path.
const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";

/// Account creation endpoint path.
const SIGN_UP_PATH: &str = "/v1/accounts:signUp";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Client for an identitytoolkit-style identity provider.
///
/// Each operation performs exactly one HTTP round trip; there is no
/// retry and no local timeout logic beyond the client-wide request
/// timeout from [`Config`].
pub struct IdentityClient {
    base: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl IdentityClient {
    /// Builds a client from config.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// Signs in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.post_credentials(SIGN_IN_PATH, email, password).await
    }

    /// Creates an account with email and password.
    pub async fn create_account(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.post_credentials(SIGN_UP_PATH, email, password).await
    }

    async fn post_credentials(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let url = match &self.api_key {
            Some(key) => format!("{}{}?key={}", self.base, path, key),
            None => format!("{}{}", self.base, path),
        };

        let body = CredentialsBody {
            email,
            password,
            return_secure_token: true,
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, path, "identity provider rejected request");
            return Err(AuthError::from_provider_body(&error_body));
        }

        response.json::<Session>().await.map_err(|e| {
            tracing::warn!(error = %e, path, "malformed identity provider response");
            AuthError::new(AuthErrorKind::Transport, "Malformed provider response")
        })
    }
}

fn classify_reqwest_error(e: reqwest::Error) -> AuthError {
    if e.is_timeout() {
        AuthError::timeout()
    } else {
        AuthError::new(AuthErrorKind::Transport, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_config(base: &str) -> Config {
        Config {
            api_base: base.to_string(),
            api_key: Some("test-key".to_string()),
            ..Config::default()
        }
    }

    fn session_body(email: &str) -> serde_json::Value {
        serde_json::json!({
            "localId": "abc123",
            "email": email,
            "idToken": "token-xyz",
            "expiresIn": "3600",
        })
    }

    #[tokio::test]
    async fn sign_in_sends_one_request_and_parses_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .and(query_param("key", "test-key"))
            .and(body_json_string(
                r#"{"email":"a@b.com","password":"123456","returnSecureToken":true}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body("a@b.com")))
            .expect(1)
            .mount(&server)
            .await;

        let client = IdentityClient::new(&test_config(&server.uri())).unwrap();
        let session = client.sign_in("a@b.com", "123456").await.unwrap();

        assert_eq!(session.email, "a@b.com");
        assert_eq!(session.local_id, "abc123");
    }

    #[tokio::test]
    async fn create_account_hits_sign_up_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body("new@b.com")))
            .expect(1)
            .mount(&server)
            .await;

        let client = IdentityClient::new(&test_config(&server.uri())).unwrap();
        let session = client.create_account("new@b.com", "123456").await.unwrap();
        assert_eq!(session.email, "new@b.com");
    }

    #[tokio::test]
    async fn provider_failure_surfaces_message_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 400, "message": "EMAIL_NOT_FOUND"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = IdentityClient::new(&test_config(&server.uri())).unwrap();
        let err = client.sign_in("a@b.com", "123456").await.unwrap_err();

        assert_eq!(err.message, "EMAIL_NOT_FOUND");
        assert_eq!(err.kind, AuthErrorKind::Provider);
    }

    #[tokio::test]
    async fn failure_without_reason_gets_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = IdentityClient::new(&test_config(&server.uri())).unwrap();
        let err = client.create_account("a@b.com", "123456").await.unwrap_err();

        assert_eq!(err.message, crate::auth::DEFAULT_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn missing_api_key_omits_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body("a@b.com")))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config {
            api_base: server.uri(),
            api_key: None,
            ..Config::default()
        };
        let client = IdentityClient::new(&config).unwrap();
        assert!(client.sign_in("a@b.com", "123456").await.is_ok());
    }
}

//! API client for the DALU bookkeeping backend.
//!
//! Every request goes through one path: attach the stored bearer token,
//! send, and sort the outcome into success payload, application error, or
//! session invalidation. A 401 from any endpoint clears the session
//! storage first and then triggers the login redirect, so a retry can
//! never re-send a stale token.
//!
//! Login and signup are the one exception: the backend answers bad
//! credentials with HTTP 401 plus a `success: false` body, so those two
//! calls bypass the expiry handling.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{Session, SessionData};
use crate::models::Usuario;

use super::error::application_failure;
use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for a CLI.
const REQUEST_TIMEOUT_SECS: u64 = 30;

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTRO_PATH: &str = "/api/auth/registro";
const VERIFY_PATH: &str = "/api/auth/verify";

/// Invoked when the client invalidates the session (401 or explicit
/// logout) - the CLI analog of the browser redirect to `/login`.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: String,
    usuario: Usuario,
    empresa_id: i64,
}

/// Clone is cheap - reqwest::Client shares its connection pool, and the
/// session and navigator are shared handles.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    /// Perform one request against the backend.
    ///
    /// - a 401 invalidates the session: storage cleared, login redirect
    ///   triggered exactly once, `SessionExpired` returned, body ignored
    /// - any other response is parsed as JSON (`MalformedResponse` if it
    ///   is not) and checked for the backend's failure markers
    ///   (`Application` carrying the server message verbatim)
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers(extra_headers);

        let mut builder = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(method = %method, url = %url, "Sending API request");
        let response = builder.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(self.expire_session());
        }

        let text = response.text().await?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        if let Some(message) = application_failure(&payload) {
            return Err(ApiError::Application(message));
        }

        Ok(payload)
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::POST, path, Some(body), None).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, Some(body), None).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, None, None).await
    }

    /// GET `path` and deserialize the payload into a typed model
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let payload = self.get(path).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// POST `body` to `path` and deserialize the payload into a typed model
    pub async fn post_as<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ApiError> {
        let payload = self.post(path, body).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// PUT `body` to `path` and deserialize the payload into a typed model
    pub async fn put_as<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, ApiError> {
        let payload = self.put(path, body).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Authenticate and persist the session.
    ///
    /// Invalid credentials come back as 401 + `success: false`, which is
    /// an application error here, not an expired session.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionData, ApiError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        self.authenticate(LOGIN_PATH, &body).await
    }

    /// Create an account (and its empresa) and persist the auto-issued session
    pub async fn registro(
        &self,
        username: &str,
        email: &str,
        password: &str,
        empresa_nombre: &str,
    ) -> Result<SessionData, ApiError> {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "empresa_nombre": empresa_nombre,
        });
        self.authenticate(REGISTRO_PATH, &body).await
    }

    async fn authenticate(&self, path: &str, body: &Value) -> Result<SessionData, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;

        let text = response.text().await?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        if let Some(message) = application_failure(&payload) {
            return Err(ApiError::Application(message));
        }

        let auth: AuthResponse = serde_json::from_value(payload)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        let data = SessionData {
            access_token: auth.access_token,
            usuario: auth.usuario,
            empresa_id: auth.empresa_id,
        };
        if let Err(e) = self.session.save(&data) {
            warn!(error = %e, "Failed to persist session");
        }
        Ok(data)
    }

    /// Validate the stored token against the backend
    pub async fn verify(&self) -> Result<Usuario, ApiError> {
        #[derive(Deserialize)]
        struct VerifyResponse {
            usuario: Usuario,
        }

        let response: VerifyResponse = self.get_as(VERIFY_PATH).await?;
        Ok(response.usuario)
    }

    /// Clear the session and redirect to login. No network call - the
    /// backend's logout endpoint only acknowledges. Idempotent.
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "Failed to clear session storage");
        }
        self.navigator.redirect_to_login();
    }

    /// True iff a token is currently stored. No network call.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Default Content-Type, then caller headers, then Authorization:
    /// callers may override Content-Type but never Authorization.
    fn build_headers(&self, extra_headers: Option<HeaderMap>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(extra) = extra_headers {
            for (name, value) in extra.iter() {
                headers.insert(name.clone(), value.clone());
            }
        }

        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!(error = %e, "Stored token is not a valid header value"),
            }
        }

        headers
    }

    /// Token expired or revoked: clear storage, then redirect.
    fn expire_session(&self) -> ApiError {
        warn!("Received 401 - token expired or invalid");
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "Failed to clear session storage");
        }
        self.navigator.redirect_to_login();
        ApiError::SessionExpired
    }
}

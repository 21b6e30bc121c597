//! HTTP client adapter.
//!
//! Wraps outbound requests with the configured base URL, the `/api` prefix,
//! and a JSON content type, and attaches the bearer token for the facade's
//! declared identity scope. Token lookup happens on every request - the
//! user and admin sessions can each change between calls (interleaved user
//! and admin flows), so nothing is cached.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use insights_snap_core::{ErrorPayload, Scope};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::SessionStore;

/// Identity scope a facade method runs under, fixed at definition time.
///
/// This replaces inferring the scope from URL substrings: every API method
/// names its scope explicitly, so a path rename can never silently switch
/// which token a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScope {
    /// No Authorization header (marketing pages, public plan listing).
    Public,
    /// Bearer token from the user-scope session, when present.
    UserScoped,
    /// Bearer token from the admin-scope session, when present.
    AdminScoped,
}

impl AuthScope {
    /// The session scope backing this auth scope, if any.
    #[must_use]
    pub const fn session_scope(self) -> Option<Scope> {
        match self {
            Self::Public => None,
            Self::UserScoped => Some(Scope::User),
            Self::AdminScoped => Some(Scope::Admin),
        }
    }
}

/// Thin adapter over the external InsightsSnap REST API.
///
/// The facade methods live in [`crate::api`], split by resource; each one
/// passes its [`AuthScope`] into the shared request helpers here.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    sessions: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client from loaded configuration.
    #[must_use]
    pub fn new(config: &ClientConfig, sessions: Arc<dyn SessionStore>) -> Self {
        Self::from_parts(config.base_url.clone(), sessions)
    }

    /// Create a client from a raw base URL. Used directly by tests that
    /// point at a mock server.
    #[must_use]
    pub fn from_parts(base_url: impl Into<String>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sessions,
        }
    }

    /// The session store this client reads tokens from.
    #[must_use]
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Build a request with content type and, for scoped calls, the bearer
    /// token read from the session store right now. An absent token sends
    /// the request unauthenticated; the API owns the rejection.
    fn builder(&self, method: Method, auth: AuthScope, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, self.endpoint(path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(scope) = auth.session_scope() {
            match self.sessions.get(scope) {
                Ok(Some(session)) => req = req.bearer_auth(&session.token),
                Ok(None) => debug!(%scope, path, "no session, sending unauthenticated"),
                Err(e) => {
                    warn!(%scope, path, error = %e, "session store unreadable, sending unauthenticated");
                }
            }
        }

        req
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let response = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorPayload>(&body)
                .ok()
                .map(|p| p.detail);
            error!(status = %status, detail = ?detail, "API request rejected");
            return Err(ApiError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        auth: AuthScope,
        path: &str,
    ) -> Result<T, ApiError> {
        self.send(self.builder(Method::GET, auth, path)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        auth: AuthScope,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.builder(Method::POST, auth, path).json(body))
            .await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        auth: AuthScope,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.builder(Method::PUT, auth, path).json(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        auth: AuthScope,
        path: &str,
    ) -> Result<T, ApiError> {
        self.send(self.builder(Method::DELETE, auth, path)).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use insights_snap_core::Session;
    use serde_json::{Value, json};

    fn client_with_store(url: &str) -> (ApiClient, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        let client = ApiClient::from_parts(url, Arc::clone(&store) as Arc<dyn SessionStore>);
        (client, store)
    }

    #[test]
    fn test_auth_scope_maps_to_session_scope() {
        assert_eq!(AuthScope::Public.session_scope(), None);
        assert_eq!(AuthScope::UserScoped.session_scope(), Some(Scope::User));
        assert_eq!(AuthScope::AdminScoped.session_scope(), Some(Scope::Admin));
    }

    #[test]
    fn test_endpoint_inserts_api_prefix() {
        let (client, _) = client_with_store("http://localhost:9999");
        assert_eq!(
            client.endpoint("/auth/login"),
            "http://localhost:9999/api/auth/login"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let (client, _) = client_with_store("http://localhost:9999/");
        assert_eq!(
            client.endpoint("/pricing/plans"),
            "http://localhost:9999/api/pricing/plans"
        );
    }

    #[tokio::test]
    async fn test_user_scoped_request_carries_user_token_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/users/credits")
            .match_header("authorization", "Bearer user-tok")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let (client, store) = client_with_store(&server.url());
        store
            .set(Scope::User, &Session::new("user-tok".into(), json!({})))
            .unwrap();
        store
            .set(Scope::Admin, &Session::new("admin-tok".into(), json!({})))
            .unwrap();

        let _: Value = client.get(AuthScope::UserScoped, "/users/credits").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_admin_scoped_request_carries_admin_token_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/admin/pricing")
            .match_header("authorization", "Bearer admin-tok")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, store) = client_with_store(&server.url());
        store
            .set(Scope::User, &Session::new("user-tok".into(), json!({})))
            .unwrap();
        store
            .set(Scope::Admin, &Session::new("admin-tok".into(), json!({})))
            .unwrap();

        let _: Value = client.get(AuthScope::AdminScoped, "/admin/pricing").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_absent_token_sends_no_authorization_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/users/credits")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(401)
            .with_body(r#"{ "detail": "Not authenticated" }"#)
            .create_async()
            .await;

        let (client, _store) = client_with_store(&server.url());
        let result: Result<Value, _> = client.get(AuthScope::UserScoped, "/users/credits").await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Not authenticated"));
    }

    #[tokio::test]
    async fn test_token_is_read_per_request_not_cached() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/api/auth/me")
            .match_header("authorization", "Bearer first")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let second = server
            .mock("GET", "/api/auth/me")
            .match_header("authorization", "Bearer second")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let (client, store) = client_with_store(&server.url());

        store
            .set(Scope::User, &Session::new("first".into(), json!({})))
            .unwrap();
        let _: Value = client.get(AuthScope::UserScoped, "/auth/me").await.unwrap();

        store
            .set(Scope::User, &Session::new("second".into(), json!({})))
            .unwrap();
        let _: Value = client.get(AuthScope::UserScoped, "/auth/me").await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_unparseable_error_body_yields_no_detail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/auth/login")
            .with_status(500)
            .with_body("<html>gateway error</html>")
            .create_async()
            .await;

        let (client, _store) = client_with_store(&server.url());
        let result: Result<Value, _> = client
            .post(AuthScope::Public, "/auth/login", &json!({}))
            .await;

        match result.unwrap_err() {
            ApiError::Api { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, None);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}

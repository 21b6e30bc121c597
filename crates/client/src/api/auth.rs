//! User authentication endpoints.

use serde_json::json;
use tracing::instrument;

use insights_snap_core::{AuthResponse, UserSummary};

use crate::error::ApiError;
use crate::http::{ApiClient, AuthScope};

impl ApiClient {
    /// Create a user account. Returns the same `{ token, user }` shape as
    /// login, so a successful registration signs the user straight in.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it (e.g.,
    /// email already registered).
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = json!({ "name": name, "email": email, "password": password });
        self.post(AuthScope::Public, "/auth/register", &body).await
    }

    /// Log in with email and password. Returns `{ token, user }`; the
    /// caller decides whether to persist it as the user-scope session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or credentials are rejected.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({ "email": email, "password": password });
        self.post(AuthScope::Public, "/auth/login", &body).await
    }

    /// Fetch the current user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<UserSummary, ApiError> {
        self.get(AuthScope::UserScoped, "/auth/me").await
    }
}

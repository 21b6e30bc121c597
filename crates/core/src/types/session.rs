//! Identity scopes, sessions, and authentication responses.
//!
//! The client carries two fully independent identity contexts: the end-user
//! scope and the admin scope. Each scope persists at most one session (a
//! token plus an opaque profile blob), and neither scope ever reads or
//! writes the other's storage.

use serde::{Deserialize, Serialize};

/// One of the two independent identity contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// End-user identity (dashboard, search, exports).
    User,
    /// Admin identity (pricing CRUD, settings, user management).
    Admin,
}

impl Scope {
    /// Route to redirect to when this scope has no session.
    #[must_use]
    pub const fn login_route(self) -> &'static str {
        match self {
            Self::User => "/login",
            Self::Admin => "/admin/login",
        }
    }

    /// Route to land on after a successful login for this scope.
    #[must_use]
    pub const fn home_route(self) -> &'static str {
        match self {
            Self::User => "/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }

    /// Storage namespace prefix. The two namespaces are disjoint, which is
    /// what keeps the scopes non-interfering.
    #[must_use]
    pub const fn storage_namespace(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.storage_namespace())
    }
}

/// The token + profile pair identifying an authenticated actor within one
/// scope.
///
/// The profile is opaque to the client: it is whatever JSON blob the login
/// endpoint returned, parsed but never validated beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to scoped requests.
    pub token: String,
    /// Opaque profile returned by login (`user` or `admin` object).
    pub profile: serde_json::Value,
}

impl Session {
    /// Create a session from a login response's parts.
    #[must_use]
    pub const fn new(token: String, profile: serde_json::Value) -> Self {
        Self { token, profile }
    }
}

/// Successful user login/registration response: `{ token, user }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for the user scope.
    pub token: String,
    /// Opaque user profile.
    pub user: serde_json::Value,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Self::new(resp.token, resp.user)
    }
}

/// Successful admin login response: `{ token, admin }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAuthResponse {
    /// Bearer token for the admin scope.
    pub token: String,
    /// Opaque admin profile.
    pub admin: serde_json::Value,
}

impl From<AdminAuthResponse> for Session {
    fn from(resp: AdminAuthResponse) -> Self {
        Self::new(resp.token, resp.admin)
    }
}

/// Error body the external API attaches to rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable rejection reason, surfaced verbatim to the user.
    pub detail: String,
}

/// Generic `{ success }` acknowledgement returned by mutations that carry
/// no other data (delete plan, update settings, adjust credits).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    /// Whether the mutation was applied.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scope_routes_are_disjoint() {
        assert_eq!(Scope::User.login_route(), "/login");
        assert_eq!(Scope::Admin.login_route(), "/admin/login");
        assert_ne!(Scope::User.storage_namespace(), Scope::Admin.storage_namespace());
    }

    #[test]
    fn test_session_from_auth_response() {
        let resp = AuthResponse {
            token: "tok-123".to_string(),
            user: json!({ "id": "u1", "email": "a@b.co" }),
        };
        let session = Session::from(resp);
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.profile["email"], "a@b.co");
    }

    #[test]
    fn test_session_from_admin_auth_response() {
        let resp = AdminAuthResponse {
            token: "admin-tok".to_string(),
            admin: json!({ "username": "admin" }),
        };
        let session = Session::from(resp);
        assert_eq!(session.token, "admin-tok");
        assert_eq!(session.profile["username"], "admin");
    }

    #[test]
    fn test_error_payload_parses_detail() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{ "detail": "Invalid credentials" }"#).expect("valid payload");
        assert_eq!(payload.detail, "Invalid credentials");
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let session = Session::new("t".to_string(), json!({ "name": "Pat" }));
        let encoded = serde_json::to_string(&session).expect("serialize");
        let decoded: Session = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, session);
    }
}

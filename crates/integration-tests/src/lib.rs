//! Integration tests for the InsightsSnap client.
//!
//! Every test drives the real [`ApiClient`] facades against a `mockito`
//! server, with an in-memory session store standing in for the persisted
//! one.
//!
//! # Test Categories
//!
//! - `auth_scoping` - per-request bearer token selection and scope isolation
//! - `session_flows` - login/logout/guard lifecycles and 401 recovery
//! - `admin_plans` - CRUD re-fetch discipline and the destructive-delete
//!   confirmation contract

use std::sync::Arc;

use insights_snap_client::{ApiClient, MemorySessionStore, SessionStore};
use insights_snap_core::{Scope, Session};

/// A client pointed at a mock server, plus a handle to its session store.
pub struct TestContext {
    pub client: ApiClient,
    pub sessions: Arc<MemorySessionStore>,
}

impl TestContext {
    /// Build a client against the given mock server URL with empty
    /// sessions.
    #[must_use]
    pub fn new(server_url: &str) -> Self {
        let sessions = Arc::new(MemorySessionStore::new());
        let client =
            ApiClient::from_parts(server_url, Arc::clone(&sessions) as Arc<dyn SessionStore>);
        Self { client, sessions }
    }

    /// Seed a session for one scope.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory store rejects the write (it never does).
    pub fn sign_in(&self, scope: Scope, token: &str) {
        self.sessions
            .set(
                scope,
                &Session::new(token.to_string(), serde_json::json!({ "id": "test" })),
            )
            .expect("memory store write");
    }
}

//! InsightsSnap client core.
//!
//! This crate is the presentation layer's contract with the external
//! InsightsSnap REST API:
//!
//! - [`http::ApiClient`] - thin request adapter: base URL + `/api` prefix,
//!   JSON content type, per-request bearer token selection
//! - [`session`] - two independent credential scopes (user and admin)
//!   behind an injectable [`session::SessionStore`] capability
//! - [`guard`] - the presence check run before a protected view renders
//! - [`api`] - identity-scoped facades for every API resource
//! - [`forms`] - form-to-payload transforms for the admin CRUD dialogs
//! - [`notify`] - translation of request outcomes into user-visible
//!   notifications
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use insights_snap_client::{config::ClientConfig, http::ApiClient, session::FileSessionStore};
//!
//! let config = ClientConfig::from_env()?;
//! let sessions = Arc::new(FileSessionStore::new(&config.session_dir)?);
//! let client = ApiClient::new(&config, sessions);
//!
//! let resp = client.login("you@example.com", "hunter2").await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod guard;
pub mod http;
pub mod notify;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use forms::{FormError, PlanForm, split_features};
pub use guard::{GuardOutcome, guard, recover_unauthorized};
pub use http::{ApiClient, AuthScope};
pub use notify::{Notification, Severity};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};

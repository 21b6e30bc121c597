//! Route guard: the presence check run before a protected view renders.
//!
//! The guard gates on session *presence* only. A stale or garbage token
//! that is merely present counts as authorized here; actual validity is the
//! external API's call, surfaced as a request-time 401. That 401 has an
//! explicit recovery path: [`recover_unauthorized`] clears the scope's
//! session and hands back the scope's login route, so a dead token cannot
//! keep a view "authorized" past its first failed request.

use tracing::warn;

use insights_snap_core::{Scope, Session};

use crate::error::ApiError;
use crate::session::SessionStore;

/// Result of guarding a protected view.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// A session is present; the view renders with this profile.
    Authorized(Session),
    /// No session; navigate to the scope's login route and render nothing.
    Redirect(&'static str),
}

impl GuardOutcome {
    /// The redirect target, when the guard denied rendering.
    #[must_use]
    pub const fn redirect_route(&self) -> Option<&'static str> {
        match self {
            Self::Authorized(_) => None,
            Self::Redirect(route) => Some(route),
        }
    }
}

/// Evaluate the guard for one scope, once, at view-mount time.
///
/// An unreadable store counts as absent: the user can always log in again,
/// whereas rendering a protected view on a guessed session cannot be
/// undone.
pub fn guard(store: &dyn SessionStore, scope: Scope) -> GuardOutcome {
    match store.get(scope) {
        Ok(Some(session)) => GuardOutcome::Authorized(session),
        Ok(None) => GuardOutcome::Redirect(scope.login_route()),
        Err(e) => {
            warn!(%scope, error = %e, "session unreadable, treating as absent");
            GuardOutcome::Redirect(scope.login_route())
        }
    }
}

/// Recovery path for a request-time authorization failure.
///
/// When a scoped call comes back 401, the presence-based authorization the
/// guard granted is revoked: the scope's session is cleared and the caller
/// gets the login route to navigate to. Any other error returns `None` and
/// stays on the normal notification pathway.
pub fn recover_unauthorized(
    store: &dyn SessionStore,
    scope: Scope,
    err: &ApiError,
) -> Option<&'static str> {
    if !err.is_unauthorized() {
        return None;
    }
    if let Err(e) = store.clear(scope) {
        warn!(%scope, error = %e, "failed to clear rejected session");
    }
    Some(scope.login_route())
}

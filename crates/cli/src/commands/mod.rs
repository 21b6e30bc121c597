//! Command implementations.
//!
//! Shared here: the error type for setup failures, the per-command outcome,
//! and the helpers every "page" uses - guard-then-call plumbing and the
//! destructive-action confirmation prompt.
//!
//! API failures never propagate out of a command. Each command catches its
//! own request's failure, prints a notification (the API's `detail` when
//! present, a fixed fallback otherwise), and reports [`CommandOutcome::Failed`].

pub mod admin;
pub mod user;

use std::io::Write as _;

use thiserror::Error;

use insights_snap_client::{
    ApiClient, ApiError, ConfigError, GuardOutcome, Notification, SessionError, guard,
    recover_unauthorized,
};
use insights_snap_core::{Scope, Session};

/// Setup failures that abort a command before any page logic runs.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

/// Whether the command's page-level work succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    Failed,
}

/// Run the route guard for a protected page. `None` means the guard
/// redirected: the login route has been printed and the page must not run.
pub(crate) fn require_session(client: &ApiClient, scope: Scope) -> Option<Session> {
    match guard(client.sessions().as_ref(), scope) {
        GuardOutcome::Authorized(session) => Some(session),
        GuardOutcome::Redirect(route) => {
            println!("not signed in, go to {route}");
            None
        }
    }
}

/// Handle a failed request on a protected page: a 401 revokes the session
/// and prints the login redirect, anything else prints the notification.
pub(crate) fn report_failure(client: &ApiClient, scope: Scope, err: &ApiError, fallback: &str) {
    if let Some(route) = recover_unauthorized(client.sessions().as_ref(), scope, err) {
        println!("{}", Notification::for_error(err, fallback));
        println!("session expired, go to {route}");
        return;
    }
    println!("{}", Notification::for_error(err, fallback));
}

/// Ask for confirmation before a destructive action. Only an explicit
/// "y"/"yes" proceeds.
pub(crate) fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative_accepts_yes_variants() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("  YES \n"));
    }

    #[test]
    fn test_is_affirmative_rejects_everything_else() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative("\n"));
    }
}

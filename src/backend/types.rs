//! Data types crossing the backend boundary.

use thiserror::Error;

/// The authenticated-user record mirroring the hosted service's login state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

/// Result of an account-creation request. Which variant comes back depends
/// on whether the service has email confirmation enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Confirmation is disabled server-side: the account is usable right away.
    Confirmed(Session),
    /// A confirmation email was sent; there is no session yet.
    PendingConfirmation,
}

/// Failure returned by the hosted service or the transport underneath it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The service rejected the request; the message is its own wording.
    #[error("{0}")]
    Service(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Malformed(String),
}

//! Session bootstrap: the one-shot initial load and the change subscription.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::backend::{AuthBackend, Session, Subscription};
use crate::controller::lifecycle::LifecycleToken;

/// Result of the one-shot initial session fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionLoad {
    /// The backend answered; `None` means nobody is logged in.
    Restored(Option<Session>),
    Failed(String),
}

/// Fetch the persisted session once.
///
/// `apply` runs only if `token` is still active when the response arrives,
/// so a teardown racing the request cannot mutate state. Either way the
/// caller's loading phase ends with this single callback.
pub async fn load_initial_session<B: AuthBackend>(
    backend: &B,
    token: &LifecycleToken,
    apply: impl FnOnce(SessionLoad),
) {
    let load = match backend.current_session().await {
        Ok(session) => SessionLoad::Restored(session),
        Err(err) => SessionLoad::Failed(err.to_string()),
    };
    if token.is_active() {
        apply(load);
    }
}

/// Subscribe to session-change notifications for the lifetime of `token`.
///
/// Notifications delivered after the token is retired are dropped. The
/// returned disposer must be disposed on teardown alongside retiring the
/// token.
pub fn bind_session_changes<B: AuthBackend>(
    backend: &B,
    token: &LifecycleToken,
    apply: impl Fn(Option<Session>) + Send + Sync + 'static,
) -> Subscription {
    let token = token.clone();
    backend.subscribe(move |session| {
        if token.is_active() {
            apply(session);
        }
    })
}

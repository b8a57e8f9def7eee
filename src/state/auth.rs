//! Authentication state shared through context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::backend::Session;
use crate::controller::form::AuthOutcome;
use crate::controller::session::SessionLoad;

/// Which credential form is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Coarse position in the auth state machine. `error`/`notice` on
/// [`AuthState`] refine the two idle variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Initial bootstrap or a submit in flight. Submit controls are disabled.
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Session, form mode, and user-facing feedback.
///
/// Every submit passes through `Loading` (via [`AuthState::begin_submit`])
/// before [`AuthState::apply_outcome`] resolves it to a terminal status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub status: AuthStatus,
    pub session: Option<Session>,
    pub mode: AuthMode,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Loading
    }

    /// Enter the in-flight phase and drop stale feedback.
    pub fn begin_submit(&mut self) {
        self.status = AuthStatus::Loading;
        self.error = None;
        self.notice = None;
    }

    /// Switch between login and signup. Feedback is cleared; typed field
    /// values are owned by the form and survive the switch.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.error = None;
        self.notice = None;
    }

    /// Resolve the one-shot initial session fetch.
    pub fn apply_load(&mut self, load: SessionLoad) {
        match load {
            SessionLoad::Restored(session) => {
                self.status = if session.is_some() {
                    AuthStatus::Authenticated
                } else {
                    AuthStatus::Unauthenticated
                };
                self.session = session;
            }
            SessionLoad::Failed(message) => {
                self.session = None;
                self.status = AuthStatus::Unauthenticated;
                self.error = Some(message);
            }
        }
    }

    /// Resolve a submit. `Failed` keeps whatever session existed before;
    /// a failed logout must not drop the login.
    pub fn apply_outcome(&mut self, outcome: AuthOutcome) {
        match outcome {
            AuthOutcome::Authenticated { session, notice } => {
                self.session = Some(session);
                self.status = AuthStatus::Authenticated;
                self.error = None;
                self.notice = notice;
            }
            AuthOutcome::Unauthenticated { notice } => {
                self.session = None;
                self.status = AuthStatus::Unauthenticated;
                self.error = None;
                self.notice = notice;
            }
            AuthOutcome::Failed { message } => {
                self.status = if self.session.is_some() {
                    AuthStatus::Authenticated
                } else {
                    AuthStatus::Unauthenticated
                };
                self.error = Some(message);
                self.notice = None;
            }
        }
    }

    /// Replace the session from a change notification. Idempotent; also
    /// covers a logout performed in another tab. While a submit is in
    /// flight the status stays `Loading` and the outcome settles it.
    pub fn session_changed(&mut self, session: Option<Session>) {
        let authenticated = session.is_some();
        self.session = session;
        if self.status != AuthStatus::Loading {
            self.status = if authenticated {
                AuthStatus::Authenticated
            } else {
                AuthStatus::Unauthenticated
            };
        }
    }
}

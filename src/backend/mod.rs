//! Backend SDK boundary.
//!
//! The hosted identity/data service is consumed through the narrow
//! [`AuthBackend`] capability trait so the session and form controllers can
//! be exercised against an in-memory substitute in tests. [`SupabaseClient`]
//! is the real implementation and is constructed explicitly in `app.rs`
//! rather than living as ambient shared state.

#[cfg(test)]
pub mod fake;
pub mod supabase;
pub mod types;

pub use supabase::SupabaseClient;
pub use types::{BackendError, Session, SignupOutcome};

/// Disposer for a session-change subscription.
///
/// Dropping it (or calling [`Subscription::dispose`]) detaches the listener;
/// no further notifications reach it afterwards.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Detach the listener now instead of waiting for drop.
    pub fn dispose(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Capabilities the client needs from the hosted service: session restore
/// and change notifications, the three auth operations, and a per-collection
/// row count for the connectivity panel.
///
/// Errors carry the service's message text; controllers decide how to
/// present it.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Restore the persisted session, if any.
    async fn current_session(&self) -> Result<Option<Session>, BackendError>;

    /// Password sign-in. Emits a session-change notification on success.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError>;

    /// Account creation. `redirect_to` is where the confirmation email sends
    /// the user back to.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: &str,
    ) -> Result<SignupOutcome, BackendError>;

    /// Sign out. Emits a session-change notification on success.
    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Register a listener for session changes; the returned disposer
    /// unsubscribes it.
    fn subscribe(
        &self,
        listener: impl Fn(Option<Session>) + Send + Sync + 'static,
    ) -> Subscription;

    /// Row count for one of the fixed collections.
    async fn count_rows(&self, collection: &str) -> Result<u64, BackendError>;
}

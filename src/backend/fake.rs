//! In-memory `AuthBackend` substitute for controller tests.
//!
//! Results are scripted per operation; every network-shaped call bumps a
//! counter so tests can assert that validation failures never reach the
//! backend.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::types::{BackendError, Session, SignupOutcome};
use crate::backend::{AuthBackend, Subscription};

type SessionListener = Arc<dyn Fn(Option<Session>) + Send + Sync>;

pub struct FakeBackend {
    pub current_session_result: RefCell<Result<Option<Session>, BackendError>>,
    pub sign_in_result: RefCell<Result<Session, BackendError>>,
    pub sign_up_result: RefCell<Result<SignupOutcome, BackendError>>,
    pub sign_out_result: RefCell<Result<(), BackendError>>,
    pub counts: RefCell<HashMap<String, Result<u64, BackendError>>>,
    /// Arguments seen by the last `sign_up` call, `(email, redirect_to)`.
    pub last_sign_up: RefCell<Option<(String, String)>>,
    /// Number of network-shaped calls made against the fake.
    calls: Cell<u32>,
    listeners: Arc<Mutex<Vec<(u64, SessionListener)>>>,
    next_listener_id: Cell<u64>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            current_session_result: RefCell::new(Ok(None)),
            sign_in_result: RefCell::new(Err(BackendError::Service("unscripted".to_owned()))),
            sign_up_result: RefCell::new(Err(BackendError::Service("unscripted".to_owned()))),
            sign_out_result: RefCell::new(Ok(())),
            counts: RefCell::new(HashMap::new()),
            last_sign_up: RefCell::new(None),
            calls: Cell::new(0),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_listener_id: Cell::new(0),
        }
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(user_id: &str, email: &str) -> Session {
        Session {
            user_id: user_id.to_owned(),
            email: email.to_owned(),
        }
    }

    pub fn set_count(&self, collection: &str, result: Result<u64, BackendError>) {
        self.counts.borrow_mut().insert(collection.to_owned(), result);
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map_or(0, |l| l.len())
    }

    /// Deliver a session-change notification to every registered listener.
    pub fn emit(&self, session: Option<Session>) {
        let snapshot: Vec<SessionListener> = match self.listeners.lock() {
            Ok(listeners) => listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => Vec::new(),
        };
        for listener in snapshot {
            listener(session.clone());
        }
    }

    fn record_call(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl AuthBackend for FakeBackend {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        self.record_call();
        self.current_session_result.borrow().clone()
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, BackendError> {
        self.record_call();
        self.sign_in_result.borrow().clone()
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        redirect_to: &str,
    ) -> Result<SignupOutcome, BackendError> {
        self.record_call();
        *self.last_sign_up.borrow_mut() = Some((email.to_owned(), redirect_to.to_owned()));
        self.sign_up_result.borrow().clone()
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.record_call();
        self.sign_out_result.borrow().clone()
    }

    fn subscribe(
        &self,
        listener: impl Fn(Option<Session>) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, Arc::new(listener)));
        }

        let registry = Arc::clone(&self.listeners);
        Subscription::new(move || {
            if let Ok(mut listeners) = registry.lock() {
                listeners.retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    async fn count_rows(&self, collection: &str) -> Result<u64, BackendError> {
        self.record_call();
        self.counts
            .borrow()
            .get(collection)
            .cloned()
            .unwrap_or(Ok(0))
    }
}

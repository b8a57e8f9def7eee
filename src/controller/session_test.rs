use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::backend::BackendError;
use crate::backend::fake::FakeBackend;

// =============================================================
// Initial load
// =============================================================

#[test]
fn initial_load_restores_session() {
    let backend = FakeBackend::new();
    *backend.current_session_result.borrow_mut() =
        Ok(Some(FakeBackend::session("u1", "ana@example.com")));

    let token = LifecycleToken::new();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    block_on(load_initial_session(&backend, &token, move |load| {
        *sink.borrow_mut() = Some(load);
    }));

    assert_eq!(
        *seen.borrow(),
        Some(SessionLoad::Restored(Some(FakeBackend::session(
            "u1",
            "ana@example.com"
        ))))
    );
}

#[test]
fn initial_load_without_session() {
    let backend = FakeBackend::new();
    let token = LifecycleToken::new();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    block_on(load_initial_session(&backend, &token, move |load| {
        *sink.borrow_mut() = Some(load);
    }));

    assert_eq!(*seen.borrow(), Some(SessionLoad::Restored(None)));
}

#[test]
fn initial_load_failure_carries_message() {
    let backend = FakeBackend::new();
    *backend.current_session_result.borrow_mut() =
        Err(BackendError::Service("token lookup failed".to_owned()));

    let token = LifecycleToken::new();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    block_on(load_initial_session(&backend, &token, move |load| {
        *sink.borrow_mut() = Some(load);
    }));

    assert_eq!(
        *seen.borrow(),
        Some(SessionLoad::Failed("token lookup failed".to_owned()))
    );
}

#[test]
fn initial_load_after_teardown_is_dropped() {
    let backend = FakeBackend::new();
    let token = LifecycleToken::new();
    token.retire();

    let applied = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&applied);
    block_on(load_initial_session(&backend, &token, move |_| {
        *sink.borrow_mut() += 1;
    }));

    assert_eq!(*applied.borrow(), 0);
}

// =============================================================
// Change subscription
// =============================================================

#[test]
fn subscription_forwards_notifications() {
    let backend = FakeBackend::new();
    let token = LifecycleToken::new();

    let updates = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&updates);
    let _subscription = bind_session_changes(&backend, &token, move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    backend.emit(Some(FakeBackend::session("u1", "ana@example.com")));
    backend.emit(None);
    assert_eq!(updates.load(Ordering::Relaxed), 2);
}

#[test]
fn notification_after_teardown_does_not_mutate_state() {
    let backend = FakeBackend::new();
    let token = LifecycleToken::new();

    let updates = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&updates);
    let subscription = bind_session_changes(&backend, &token, move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    // Teardown: retire the token first, then release the subscription.
    token.retire();
    backend.emit(Some(FakeBackend::session("u1", "ana@example.com")));
    assert_eq!(updates.load(Ordering::Relaxed), 0);

    subscription.dispose();
    backend.emit(None);
    assert_eq!(updates.load(Ordering::Relaxed), 0);
}

#[test]
fn dispose_unsubscribes_from_the_backend() {
    let backend = FakeBackend::new();
    let token = LifecycleToken::new();

    let subscription = bind_session_changes(&backend, &token, |_| {});
    assert_eq!(backend.listener_count(), 1);

    subscription.dispose();
    assert_eq!(backend.listener_count(), 0);
}

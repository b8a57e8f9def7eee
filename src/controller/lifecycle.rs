//! Teardown guard for async work tied to a component's lifetime.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable flag checked before every state mutation from async context.
///
/// Retired on teardown, after which late responses and stray session-change
/// notifications are dropped without touching state.
#[derive(Clone, Debug, Default)]
pub struct LifecycleToken(Arc<AtomicBool>);

impl LifecycleToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }

    pub fn retire(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

//! Transient credential input.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// What the user has typed into the auth form. Owned by the form component;
/// never persisted and never logged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    /// Discard everything typed, after a successful submit.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

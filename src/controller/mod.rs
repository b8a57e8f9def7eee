//! Session & form controller.
//!
//! The non-markup core of the client: session bootstrap and change
//! subscription, credential validation and submission, and the one-shot
//! diagnostics fetch. Everything here is generic over [`crate::backend::AuthBackend`]
//! and runs in plain native tests.

pub mod diagnostics;
pub mod form;
pub mod lifecycle;
pub mod session;

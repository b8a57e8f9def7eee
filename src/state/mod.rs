//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `form`, `diagnostics`) so individual
//! components can depend on small focused models. Structs are plain data
//! with pure transition methods; they live inside `RwSignal`s provided via
//! context and are unit-tested without a reactive runtime.

pub mod auth;
pub mod diagnostics;
pub mod form;

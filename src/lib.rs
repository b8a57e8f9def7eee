//! # agenda-studio
//!
//! Leptos + WASM landing page for the Agenda Studio beauty-salon scheduler.
//! A client-side rendered single page: marketing copy, a login/signup form
//! backed by a hosted Supabase backend, and a small connectivity panel that
//! shows row counts for the four core tables.
//!
//! All persistence and authentication live in the hosted service; this crate
//! only tracks session state, validates form input, and maps service
//! responses to UI state. The service is consumed through the narrow
//! [`backend::AuthBackend`] trait so the controller logic is testable without
//! a browser.

pub mod app;
pub mod backend;
pub mod components;
pub mod config;
pub mod controller;
pub mod state;

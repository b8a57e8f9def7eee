//! Page sections, top to bottom.

pub mod auth_form;
pub mod diagnostics_panel;
pub mod feature_cards;
pub mod footer;
pub mod header;
pub mod hero;

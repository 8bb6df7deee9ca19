//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, badges, spinners, the
//! lifecycle action dialog) and read the session from Leptos context.

pub mod action_modal;
pub mod header;
pub mod loading_spinner;
pub mod status_badge;

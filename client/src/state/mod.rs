//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` bridges the core session context to browser storage and a
//! reactive signal; `catalog` holds the equipment list filter form.

pub mod catalog;
pub mod session;

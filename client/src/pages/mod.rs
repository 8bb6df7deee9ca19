//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, form state, in-flight
//! flags) and delegates rendering details to `components`. Pages call the
//! core gateways through the context-provided client.

pub mod admin_requests;
pub mod borrow_request;
pub mod equipment_form;
pub mod equipment_list;
pub mod login;
pub mod my_requests;
pub mod register;

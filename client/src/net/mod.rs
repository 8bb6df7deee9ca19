//! Networking modules for the lending REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` performs the raw HTTP exchange with `gloo-net`; `api` builds the
//! shared `ApiClient` and exposes it through context.

pub mod api;
pub mod backend;

//! Shared API client wiring.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use leptos::prelude::*;
use lending_portal::ApiClient;
use lending_portal::transport::DEFAULT_API_URL;

use super::backend::FetchBackend;
use crate::state::session::{AppSession, BrowserGuard};

/// The one client every page calls gateways through.
pub type PortalClient = ApiClient<FetchBackend, BrowserGuard>;

/// Lending service base URL, fixed at build time by `PORTAL_API_URL`.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("PORTAL_API_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    configured.map(str::trim).filter(|url| !url.is_empty()).unwrap_or(DEFAULT_API_URL)
}

/// Build the client for `session` and provide it to descendants.
pub fn provide_api(session: &AppSession) {
    let client = ApiClient::new(FetchBackend, BrowserGuard::new(session.context()), api_base_url());
    provide_context(Arc::new(client));
}

/// The client provided by [`provide_api`].
pub fn use_api() -> Arc<PortalClient> {
    expect_context::<Arc<PortalClient>>()
}

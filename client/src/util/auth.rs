//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical logged-out redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use lending_portal::Session;

use crate::state::session::AppSession;

/// Only redirect once stored credentials have been read back; before that
/// every visitor looks anonymous.
pub fn should_redirect_unauth(restored: bool, session: &Session) -> bool {
    restored && !session.is_logged_in()
}

/// Redirect to `/` whenever the session has been restored and nobody is
/// logged in.
pub fn install_login_redirect<F>(session: AppSession, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let restored = session.restored.get();
        if session.current.with(|s| should_redirect_unauth(restored, s)) {
            navigate("/", NavigateOptions::default());
        }
    });
}

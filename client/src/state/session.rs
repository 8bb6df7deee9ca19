//! Browser-backed session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core `SessionContext` owns the session; this module supplies its
//! storage (`localStorage` for persistent fields, `sessionStorage` for the
//! tab-scoped username), mirrors every replacement into a signal for the
//! views, and installs the 401 behavior the transport triggers.
//!
//! HYDRATION
//! =========
//! The server renders the logged-out shell. The stored session is copied
//! into the signal by an effect after hydration, and `restored` flips once
//! that has happened so route guards do not redirect early.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use lending_portal::models::LoginResponse;
use lending_portal::session::SessionKey;
#[cfg(feature = "hydrate")]
use lending_portal::session::StorageScope;
use lending_portal::transport::SessionGuard;
use lending_portal::{Session, SessionContext, SessionStore};

pub type PortalSession = SessionContext<BrowserStore>;

// =============================================================================
// STORAGE
// =============================================================================

/// `SessionStore` over the browser's Web Storage. Storage errors read as
/// absent and writes that fail are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn storage(scope: StorageScope) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match scope {
        StorageScope::Persistent => window.local_storage().ok().flatten(),
        StorageScope::Tab => window.session_storage().ok().flatten(),
    }
}

impl SessionStore for BrowserStore {
    fn read(&self, key: SessionKey) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage(key.scope())?.get_item(key.as_str()).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: SessionKey, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage(key.scope()) {
                let _ = storage.set_item(key.as_str(), value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: SessionKey) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage(key.scope()) {
                let _ = storage.remove_item(key.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            for scope in [StorageScope::Persistent, StorageScope::Tab] {
                if let Some(storage) = storage(scope) {
                    let _ = storage.clear();
                }
            }
        }
    }
}

// =============================================================================
// REACTIVE HANDLE
// =============================================================================

/// Session handle provided to every view.
#[derive(Clone)]
pub struct AppSession {
    context: Arc<PortalSession>,
    pub current: RwSignal<Session>,
    pub restored: RwSignal<bool>,
}

impl AppSession {
    /// Open the stored session and wire it to signals.
    pub fn restore() -> Self {
        let context = Arc::new(SessionContext::new(BrowserStore));
        let current = RwSignal::new(Session::anonymous());
        let restored = RwSignal::new(false);

        context.subscribe(move |session| {
            let _ = current.try_set(session.clone());
        });

        let stored = Arc::clone(&context);
        Effect::new(move || {
            current.set(stored.current());
            restored.set(true);
        });

        Self { context, current, restored }
    }

    pub fn context(&self) -> Arc<PortalSession> {
        Arc::clone(&self.context)
    }

    /// Reactive snapshot of the session.
    pub fn get(&self) -> Session {
        self.current.get()
    }

    pub fn begin(&self, response: &LoginResponse, username: &str) -> Session {
        self.context.begin(response, username)
    }

    pub fn logout(&self) {
        self.context.logout();
    }
}

// =============================================================================
// TRANSPORT GUARD
// =============================================================================

/// Supplies the bearer token and, on 401, ends the session and sends the
/// browser to the login page.
#[derive(Clone)]
pub struct BrowserGuard {
    context: Arc<PortalSession>,
}

impl BrowserGuard {
    pub fn new(context: Arc<PortalSession>) -> Self {
        Self { context }
    }
}

impl SessionGuard for BrowserGuard {
    fn bearer(&self) -> Option<String> {
        self.context.token()
    }

    fn on_unauthorized(&self) {
        self.context.logout();
        let path = crate::util::notice::current_path();
        if needs_login_redirect(path.as_deref()) {
            crate::util::notice::redirect("/login");
        }
    }
}

/// A hard redirect from a page that already shows the login form would only
/// reload it and drop what was typed.
pub fn needs_login_redirect(path: Option<&str>) -> bool {
    !matches!(path.map(|p| p.trim_end_matches('/')), Some("" | "/login"))
}

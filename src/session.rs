//! Session Context
//!
//! Explicit auth session passed to every API call. The token lives in a
//! signal provided via context, not in ambient storage read by call sites;
//! only the session object itself touches localStorage, so a page reload
//! can restore the login.

use leptos::prelude::*;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// An authenticated session
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Session handle provided via Leptos context.
///
/// Lifecycle: `init` on login success, `clear` on logout or any 401.
#[derive(Clone, Copy)]
pub struct SessionContext {
    current: RwSignal<Option<Session>>,
}

impl SessionContext {
    /// Restore a persisted session if one exists
    pub fn load() -> Self {
        let restored = local_storage().and_then(|storage| {
            let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
            let username = storage.get_item(USERNAME_KEY).ok().flatten()?;
            Some(Session { token, username })
        });
        Self { current: RwSignal::new(restored) }
    }

    /// Begin a session after a successful login
    pub fn init(&self, token: String, username: String) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &token);
            let _ = storage.set_item(USERNAME_KEY, &username);
        }
        self.current.set(Some(Session { token, username }));
    }

    /// End the session (logout, or a 401 from anywhere)
    pub fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
        }
        self.current.set(None);
    }

    /// Tracked: the login view derives from this going false
    pub fn is_authenticated(&self) -> bool {
        self.current.with(|s| s.is_some())
    }

    /// Tracked username for display
    pub fn username(&self) -> Option<String> {
        self.current.with(|s| s.as_ref().map(|s| s.username.clone()))
    }

    /// Token for request building. Untracked: issuing a request must not
    /// subscribe the caller to session changes.
    pub fn token(&self) -> Option<String> {
        self.current.with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }
}

/// Get the session from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

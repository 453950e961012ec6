//! Process-wide bearer token store.
//!
//! The login flow (outside this crate) writes the token here after
//! authenticating; the profile client only reads it. A missing token is a
//! hard precondition failure: no request leaves the client without one.

use std::sync::{Arc, OnceLock, RwLock};

/// Shared handle over the session's bearer token.
///
/// Cloning is cheap and every clone sees the same token. Tests construct
/// their own stores; the application uses [`SessionStore::global`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

static GLOBAL: OnceLock<SessionStore> = OnceLock::new();

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The one store the running application shares.
    pub fn global() -> Self {
        GLOBAL.get_or_init(Self::new).clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    /// Drop the token, e.g. on logout or after the backend reports 401.
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_token() {
        let store = SessionStore::new();
        assert!(store.token().is_none());

        store.set_token("abc123");
        assert_eq!(store.token().as_deref(), Some("abc123"));

        store.clear();
        assert!(store.token().is_none());
    }

    #[test]
    fn clones_share_the_token() {
        let store = SessionStore::new();
        let clone = store.clone();
        store.set_token("shared");
        assert_eq!(clone.token().as_deref(), Some("shared"));
    }
}

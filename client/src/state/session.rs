//! Bearer-token session shared by every component through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `MuseumApi` reads the token for privileged commands; login/logout write
//! it. The token is mirrored into durable storage under [`TOKEN_KEY`] so a
//! restarted app picks it up again. There is no expiry or refresh: a token is
//! valid until the backend says otherwise.
//!
//! DESIGN
//! ======
//! An explicit handle instead of a process-wide global. Clones share one
//! slot. The `Mutex`es only exist to meet context `Send + Sync` bounds; all
//! access happens on the UI thread.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::util::storage::Storage;

/// Durable storage key for the session token.
pub const TOKEN_KEY: &str = "auth_token";

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    memory: Mutex<Option<String>>,
    storage: Arc<dyn Storage>,
    on_unauthorized: Mutex<Option<UnauthorizedHook>>,
}

impl Session {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                memory: Mutex::new(None),
                storage,
                on_unauthorized: Mutex::new(None),
            }),
        }
    }

    pub fn set_token(&self, token: &str) {
        *self.memory() = Some(token.to_owned());
        self.inner.storage.set(TOKEN_KEY, token);
    }

    /// Current token; falls back to durable storage when memory is empty.
    pub fn token(&self) -> Option<String> {
        let mut memory = self.memory();
        if memory.is_none() {
            *memory = self.inner.storage.get(TOKEN_KEY);
        }
        memory.clone()
    }

    pub fn clear_token(&self) {
        *self.memory() = None;
        self.inner.storage.remove(TOKEN_KEY);
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Install the hook run when a privileged call is attempted without a
    /// token. Replaces any previous hook.
    pub fn set_on_unauthorized(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.hook() = Some(Arc::new(hook));
    }

    pub fn notify_unauthorized(&self) {
        // Clone out so the hook may touch the session without deadlocking.
        let hook = self.hook().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    fn memory(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.inner.memory.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn hook(&self) -> std::sync::MutexGuard<'_, Option<UnauthorizedHook>> {
        self.inner.on_unauthorized.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

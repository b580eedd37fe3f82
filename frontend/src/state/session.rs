use std::{cell::RefCell, fmt, rc::Rc};

use leptos::*;

use crate::utils::storage as storage_utils;

/// Key the session token is stored under in `localStorage`.
pub const TOKEN_KEY: &str = "token";

/// Synchronous key-value home of the session token.
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str) -> Result<(), String>;
    fn remove(&self);
}

/// Browser `localStorage`, the store used by the running app.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn read(&self) -> Option<String> {
        storage_utils::read_item(TOKEN_KEY)
    }

    fn write(&self, token: &str) -> Result<(), String> {
        storage_utils::write_item(TOKEN_KEY, token)
    }

    fn remove(&self) {
        storage_utils::remove_item(TOKEN_KEY);
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) {
        self.token.borrow_mut().take();
    }
}

/// Process-wide session shared by the navigation guard and the HTTP transport.
///
/// Both only read the token. It is written by [`Session::begin`] after a
/// successful login and removed by [`Session::end`] on logout. Clones share
/// the same store.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn browser() -> Self {
        Self::new(LocalStorageTokenStore)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    pub fn with_token(token: &str) -> Self {
        let store = MemoryTokenStore::default();
        *store.token.borrow_mut() = Some(token.to_string());
        Self::new(store)
    }

    /// Current token; an empty value counts as no token.
    pub fn token(&self) -> Option<String> {
        self.store.read().filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn begin(&self, token: &str) -> Result<(), String> {
        self.store.write(token)?;
        log::debug!("session started");
        Ok(())
    }

    pub fn end(&self) {
        self.store.remove();
        log::debug!("session ended");
    }
}

impl Default for Session {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::browser()
        } else {
            Self::in_memory()
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

pub fn provide_session(session: Session) {
    provide_context(session);
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn begin_and_end_round_trip() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        session.begin("jwt-abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("jwt-abc"));
        session.end();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        let session = Session::with_token("");
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn clones_share_the_same_store() {
        let session = Session::in_memory();
        let guard_view = session.clone();
        session.begin("t1").unwrap();
        assert!(guard_view.is_authenticated());
        guard_view.end();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn use_session_reads_provided_context() {
        with_runtime(|| {
            provide_session(Session::with_token("ctx-token"));
            assert_eq!(use_session().token().as_deref(), Some("ctx-token"));
        });
    }

    #[test]
    fn use_session_falls_back_to_empty_session_on_host() {
        with_runtime(|| {
            assert!(!use_session().is_authenticated());
        });
    }
}

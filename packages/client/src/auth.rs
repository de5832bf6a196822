//! Bearer credential storage.

use std::sync::RwLock;

/// Where the session credential lives. A browser build keeps it in local
/// storage; tests and the CLI keep it in memory.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: String);
    /// Session teardown: forget the credential.
    fn clear(&self);
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn set_token(&self, token: String) {
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    fn clear(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }
}

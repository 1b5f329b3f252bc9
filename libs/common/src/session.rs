//! Session token storage
//!
//! The client keeps a single bearer token as its only durable state. The
//! store is injectable so business logic stays decoupled from any concrete
//! persistence mechanism: an in-memory store for tests and short-lived
//! tooling, a file-backed adapter for anything that should survive a
//! restart. No expiry checking happens here; expiry is discovered
//! reactively through a 401 response.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{info, warn};

/// Storage for the session bearer token
pub trait TokenStore: Send + Sync {
    /// Get the stored token, if any
    fn get(&self) -> Option<String>;

    /// Store a token, replacing any previous one
    fn set(&self, token: &str);

    /// Remove the stored token
    fn clear(&self);
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a token
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().map(|guard| guard.clone()).unwrap_or(None)
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// File-backed token store
///
/// Persistence is best-effort: storage failures are logged and the
/// operation proceeds as if the store were empty, matching how browser
/// storage degrades.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store persisting to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(_) => None,
        }
    }

    fn set(&self, token: &str) {
        if let Err(e) = std::fs::write(&self.path, token) {
            warn!("Failed to persist session token: {}", e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => info!("Session token cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to clear session token: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = std::env::temp_dir().join(format!("kelasku-token-{}", std::process::id()));
        let store = FileTokenStore::new(&path);

        store.clear();
        assert_eq!(store.get(), None);

        store.set("tok-999");
        assert_eq!(store.get(), Some("tok-999".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }
}

//! Persisted Token Storage
//!
//! Stores the raw token string in a file under the OS config directory —
//! the native analogue of browser-local storage keyed under an
//! application-specific name. The token is opaque: it is written and read
//! back verbatim, never inspected.

use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "apex-core";
const TOKEN_FILE: &str = "auth_token";

/// File-backed store for the persisted bearer token
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl Default for TokenStore {
    fn default() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(APP_DIR).join(TOKEN_FILE),
        }
    }
}

impl TokenStore {
    /// Store under the OS config directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Store at an explicit path (used by tests)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted token, if any
    pub fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Persist a token, creating the parent directory if needed
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    /// Remove the persisted token; absent is not an error
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::with_path(dir.path().join("auth_token"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_dir, store) = temp_store();
        store.save("tok-123").unwrap();
        assert_eq!(store.load().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_clear_removes_token() {
        let (_dir, store) = temp_store();
        store.save("tok-123").unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_when_absent_is_ok() {
        let (_dir, store) = temp_store();
        assert!(store.clear().is_ok());
    }
}

//! Durable credential storage.
//!
//! The platform keeps exactly one credential: the bearer token handed back by
//! a successful login or signup. It lives in a file named `authToken` inside
//! the data directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;

/// Capability over the single stored credential slot
pub trait CredentialStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Persist a token, replacing any existing one
    fn store(&mut self, token: &str) -> Result<()>;

    /// Remove the stored token; removing a missing token is not an error
    fn clear(&mut self) -> Result<()>;
}

/// File-backed store; the token is the file's entire contents
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.token_path())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CredentialStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).context("Failed to read token file")?;
        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token.to_string()))
    }

    fn store(&mut self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create data directory")?;
        }
        fs::write(&self.path, token).context("Failed to write token file")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove token file"),
        }
    }
}

/// In-memory store for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }
}

impl CredentialStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }

    fn store(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> FileTokenStore {
        FileTokenStore::new(temp_dir.path().join("authToken"))
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        store.store("tok-123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileTokenStore::new(temp_dir.path().join("nested").join("authToken"));

        store.store("tok-123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_clear_removes_token() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        store.store("tok-123").unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store.clear().unwrap();
    }

    #[test]
    fn test_whitespace_only_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        std::fs::write(temp_dir.path().join("authToken"), "  \n").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_round_trips() {
        let mut store = MemoryTokenStore::new();
        assert!(store.load().unwrap().is_none());

        store.store("tok-456").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-456"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}

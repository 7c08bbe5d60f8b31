//! Session store - single source of truth for the admin credential
//!
//! The credential lives in memory and is mirrored into a durable file so a
//! restarted process picks it up again. Memory and durable copies move
//! together: every mutation of one updates the other. The store itself never
//! fails; if the durable side is unavailable it degrades to memory-only and
//! says so once in the log.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use directories::ProjectDirs;
use tracing::{debug, warn};

const SESSION_FILE: &str = "session";

/// Owns the credential lifecycle. Injected into the API client and the auth
/// gate as a trait object so tests can substitute an in-memory store.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Store the credential in memory and durable storage. No validation of
    /// the content.
    async fn set(&self, value: &str);

    /// Current credential, hydrating lazily from durable storage on first
    /// access. Idempotent.
    async fn get(&self) -> Option<String>;

    /// Wipe memory and durable storage. Idempotent; clearing an already
    /// clear store is a no-op.
    async fn clear(&self);
}

/// File-backed store: one plaintext credential in a fixed file under the
/// platform data dir (or an explicit override).
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // None = not yet hydrated from disk; Some(None) = known absent
    cached: Mutex<Option<Option<String>>>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: Mutex::new(None),
        }
    }

    /// Store at the default platform location,
    /// e.g. `~/.local/share/azulu-admin/session` on Linux.
    pub fn at_default_location() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "azulu-admin")?;
        Some(Self::new(dirs.data_dir().join(SESSION_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_from_disk(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let value = contents.trim_end_matches('\n').to_string();
                if value.is_empty() { None } else { Some(value) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "session file unreadable, running memory-only");
                None
            }
        }
    }

    fn write_to_disk(&self, value: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "cannot create session dir, running memory-only");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, value) {
            warn!(path = %self.path.display(), error = %e, "cannot persist session, running memory-only");
        }
    }

    fn remove_from_disk(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot remove session file");
            }
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn set(&self, value: &str) {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        *cached = Some(Some(value.to_string()));
        self.write_to_disk(value);
        debug!("credential stored");
    }

    async fn get(&self) -> Option<String> {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        if cached.is_none() {
            *cached = Some(self.read_from_disk());
        }
        cached.clone().flatten()
    }

    async fn clear(&self) {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        *cached = Some(None);
        self.remove_from_disk();
        debug!("credential cleared");
    }
}

/// Memory-only store for tests and for hosts where no data dir can be
/// resolved.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn set(&self, value: &str) {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(value.to_string());
    }

    async fn get(&self) -> Option<String> {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    async fn clear(&self) {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
        FileSessionStore::new(dir.path().join("session"))
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("secret1").await;
        assert_eq!(store.get().await.as_deref(), Some("secret1"));
    }

    #[tokio::test]
    async fn test_survives_simulated_restart() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set("secret1").await;

        // A fresh store over the same file is a new process as far as the
        // store is concerned.
        let restarted = store_in(&dir);
        assert_eq!(restarted.get().await.as_deref(), Some("secret1"));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("secret1").await;
        store.clear().await;
        assert_eq!(store.get().await, None);

        // Double-clear is a no-op.
        store.clear().await;
        assert_eq!(store.get().await, None);

        let restarted = store_in(&dir);
        assert_eq!(restarted.get().await, None);
    }

    #[tokio::test]
    async fn test_get_on_empty_store_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).get().await, None);
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("old").await;
        store.set("new").await;
        assert_eq!(store.get().await.as_deref(), Some("new"));

        let restarted = store_in(&dir);
        assert_eq!(restarted.get().await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get().await, None);

        store.set("secret1").await;
        assert_eq!(store.get().await.as_deref(), Some("secret1"));

        store.clear().await;
        assert_eq!(store.get().await, None);
    }
}

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::fs;

// 1. SessionStorage Contract
/// SessionStorage
///
/// Defines the abstract contract for the persisted session record: a single
/// serialized value under a well-known key, written by the external login flow
/// and read back at startup. This trait allows us to swap the concrete
/// implementation—from the real file-backed store (FileSessionStorage) to the
/// in-memory Mock (MockSessionStorage) during testing—without affecting the
/// session lifecycle code.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Loads the raw serialized record, if one exists. Absence is not an
    /// error; it simply means no session was persisted.
    async fn load(&self) -> Option<String>;

    /// Persists the raw serialized record, overwriting any previous value.
    async fn save(&self, raw: &str) -> Result<(), String>;

    /// Removes the persisted record. Called on logout and when a stored
    /// record turns out to be unparsable.
    async fn clear(&self) -> Result<(), String>;
}

// 2. The Real Implementation (Filesystem)
/// FileSessionStorage
///
/// The concrete implementation backing the session record with a single JSON
/// file at the configured path. I/O failures on load are treated the same as
/// an absent record; failures on save/clear surface as errors for the caller
/// to log.
#[derive(Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// new
    ///
    /// Constructs the store for the path resolved by AppConfig. The file is
    /// not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).await.ok()
    }

    async fn save(&self, raw: &str) -> Result<(), String> {
        fs::write(&self.path, raw)
            .await
            .map_err(|e| format!("failed to persist session record: {e}"))
    }

    async fn clear(&self) -> Result<(), String> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            // Clearing an already-absent record is a success, not a failure.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("failed to clear session record: {e}")),
        }
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// MockSessionStorage
///
/// A mock implementation of `SessionStorage` used exclusively for unit and
/// integration testing. It holds the record in memory, can be pre-seeded with
/// arbitrary (including malformed) content, and can simulate write failures.
#[derive(Clone, Default)]
pub struct MockSessionStorage {
    record: Arc<Mutex<Option<String>>>,
    /// When true, save and clear return a simulated failure.
    should_fail: bool,
}

impl MockSessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose write operations always fail.
    pub fn new_failing() -> Self {
        Self {
            record: Arc::new(Mutex::new(None)),
            should_fail: true,
        }
    }

    /// A mock pre-seeded with a raw record, exactly as if a previous login
    /// flow had persisted it.
    pub fn with_record(raw: &str) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(raw.to_string()))),
            should_fail: false,
        }
    }

    /// Inspects the currently stored raw record. Test-assertion helper.
    pub fn stored(&self) -> Option<String> {
        self.record.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStorage for MockSessionStorage {
    async fn load(&self) -> Option<String> {
        self.record.lock().unwrap().clone()
    }

    async fn save(&self, raw: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock Storage Error: Simulation requested".to_string());
        }
        *self.record.lock().unwrap() = Some(raw.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock Storage Error: Simulation requested".to_string());
        }
        *self.record.lock().unwrap() = None;
        Ok(())
    }
}

/// StorageState
///
/// The concrete type used to share the session storage backend across the
/// shell and the external login flow.
pub type StorageState = Arc<dyn SessionStorage>;

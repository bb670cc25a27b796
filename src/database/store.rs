use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

use crate::database::models::{ScheduleDocument, WeekdayNames};
use crate::utils::errors::StoreError;
use crate::utils::logging::log_store_operation;

/// Backing storage for the schedule document.
///
/// `load` returns the default document when nothing has been persisted yet.
/// `save` replaces the persisted document as a whole.
pub trait ScheduleStore: Send + Sync {
    fn load(&self) -> Result<ScheduleDocument, StoreError>;
    fn save(&self, doc: &ScheduleDocument) -> Result<(), StoreError>;
    /// Human-readable location used in logs and errors
    fn location(&self) -> String;
}

fn encode(doc: &ScheduleDocument) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    doc.serialize(&mut ser).map_err(StoreError::Serialization)?;
    Ok(buf)
}

fn decode(location: &str, bytes: &[u8]) -> Result<ScheduleDocument, StoreError> {
    serde_json::from_slice(bytes).map_err(|source| StoreError::Corruption {
        location: location.to_string(),
        source,
    })
}

/// Document persisted as a JSON file
pub struct JsonFileStore {
    path: PathBuf,
    weekdays: WeekdayNames,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, weekdays: WeekdayNames) -> Self {
        Self {
            path: path.into(),
            weekdays,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            location: self.location(),
            source,
        }
    }
}

impl ScheduleStore for JsonFileStore {
    fn load(&self) -> Result<ScheduleDocument, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => decode(&self.location(), &bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log_store_operation("load", &self.location(), Some("file absent, using default document"));
                Ok(ScheduleDocument::with_weekdays(&self.weekdays))
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, doc: &ScheduleDocument) -> Result<(), StoreError> {
        let bytes = encode(doc)?;

        let dir = self.dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;
        }

        // Uniquely named sibling file, renamed over the target, so readers never
        // see a partial file and other writers (e.g. planner-admin) never share it
        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        temp.write_all(&bytes).map_err(|e| self.io_error(e))?;
        temp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        log_store_operation("save", &self.location(), Some(&format!("{} bytes", bytes.len())));
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Document held in memory as serialized JSON
pub struct MemoryStore {
    contents: Mutex<Option<Vec<u8>>>,
    weekdays: WeekdayNames,
}

impl MemoryStore {
    pub fn new(weekdays: WeekdayNames) -> Self {
        Self {
            contents: Mutex::new(None),
            weekdays,
        }
    }

    /// Store preloaded with raw persisted text, valid or not
    pub fn with_contents(contents: impl Into<String>, weekdays: WeekdayNames) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into().into_bytes())),
            weekdays,
        }
    }

    /// The persisted text, if anything has been saved
    pub fn contents(&self) -> Option<String> {
        self.lock()
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        self.contents.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ScheduleStore for MemoryStore {
    fn load(&self) -> Result<ScheduleDocument, StoreError> {
        match self.lock().as_deref() {
            Some(bytes) => decode(&self.location(), bytes),
            None => Ok(ScheduleDocument::with_weekdays(&self.weekdays)),
        }
    }

    fn save(&self, doc: &ScheduleDocument) -> Result<(), StoreError> {
        let bytes = encode(doc)?;
        *self.lock() = Some(bytes);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Shared handle to the schedule document.
///
/// Every mutation runs as one load-modify-save cycle under a process-wide
/// lock, so concurrent updates from different chats cannot overwrite each
/// other.
#[derive(Clone)]
pub struct StoreManager {
    store: Arc<dyn ScheduleStore>,
    write_lock: Arc<tokio::sync::Mutex<()>>,
}

impl StoreManager {
    pub fn new(store: impl ScheduleStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn file(path: impl Into<PathBuf>, weekdays: WeekdayNames) -> Self {
        Self::new(JsonFileStore::new(path, weekdays))
    }

    pub fn in_memory(weekdays: WeekdayNames) -> Self {
        Self::new(MemoryStore::new(weekdays))
    }

    /// Loads the current document without taking the write lock.
    pub fn read(&self) -> Result<ScheduleDocument, StoreError> {
        log_store_operation("read", &self.store.location(), None);
        self.store.load()
    }

    /// Loads, applies `f` and saves, holding the write lock throughout.
    pub async fn update<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut ScheduleDocument) -> T,
    {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.store.load()?;
        let out = f(&mut doc);
        self.store.save(&doc)?;
        Ok(out)
    }

    pub fn location(&self) -> String {
        self.store.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_yields_default() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = JsonFileStore::new(temp_dir.path().join("data.json"), WeekdayNames::default());

        let doc = store.load().unwrap();
        assert_eq!(doc, ScheduleDocument::with_weekdays(&WeekdayNames::default()));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_creates_parent_dirs_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("nested").join("data.json");
        let store = JsonFileStore::new(&path, WeekdayNames::default());

        let mut doc = store.load().unwrap();
        doc.add_event("1", "01.09.2025", "08:30 — Линейка".to_string());
        store.save(&doc).unwrap();

        assert!(path.exists());
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("data.json")]);
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn test_separate_writers_on_same_file_do_not_clash() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("data.json");

        // Two independent stores stand in for the bot and the admin tool
        let handles: Vec<_> = (0..2)
            .map(|writer| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let store = JsonFileStore::new(path, WeekdayNames::default());
                    for i in 0..25 {
                        let mut doc = ScheduleDocument::with_weekdays(&WeekdayNames::default());
                        doc.add_event(&writer.to_string(), "01.01.2026", format!("{:02}:00 — Запись", i % 24));
                        store.save(&doc)?;
                    }
                    Ok::<(), StoreError>(())
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let store = JsonFileStore::new(&path, WeekdayNames::default());
        assert_eq!(store.load().unwrap().event_count(), 1);
        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1, "temporary files must not be left behind");
    }

    #[test]
    fn test_file_store_writes_readable_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("data.json");
        let store = JsonFileStore::new(&path, WeekdayNames::default());

        let mut doc = store.load().unwrap();
        doc.add_event("1", "01.09.2025", "08:30 — Линейка".to_string());
        store.save(&doc).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Линейка"), "non-ASCII text must not be escaped");
        assert!(text.contains("\n    \"schedule\""), "expected four-space indent: {text}");
    }

    #[test]
    fn test_file_store_corrupted_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path, WeekdayNames::default());
        assert!(matches!(store.load(), Err(StoreError::Corruption { .. })));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new(WeekdayNames::default());
        assert!(store.contents().is_none());

        let mut doc = store.load().unwrap();
        doc.add_event("9", "10.10.2025", "10:00 — Встреча".to_string());
        store.save(&doc).unwrap();

        assert_eq!(store.load().unwrap(), doc);
        assert!(store.contents().unwrap().contains("Встреча"));
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let manager = StoreManager::in_memory(WeekdayNames::default());

        let mut tasks = Vec::new();
        for i in 0..20 {
            let manager = manager.clone();
            tasks.push(tokio::spawn(async move {
                manager
                    .update(|doc| doc.add_event("1", "01.01.2026", format!("{:02}:00 — Событие {i}", i)))
                    .await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let doc = manager.read().unwrap();
        assert_eq!(doc.events_for("1", "01.01.2026").len(), 20);
    }

    #[tokio::test]
    async fn test_update_fails_on_corruption_without_saving() {
        let store = MemoryStore::with_contents("[1, 2", WeekdayNames::default());
        let manager = StoreManager::new(store);

        let result = manager.update(|doc| doc.add_event("1", "01.01.2026", "09:00 — X".to_string())).await;
        assert!(matches!(result, Err(StoreError::Corruption { .. })));
        assert!(manager.read().is_err());
    }
}

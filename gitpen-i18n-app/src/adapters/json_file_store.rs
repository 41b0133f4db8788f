//! JSON file-backed preference store
//!
//! Persists preferences as a single JSON object (one entry per key), the same
//! shape the editor's web storage holds. Values written by other tools are
//! never trusted: non-string entries are surfaced as their JSON text so locale
//! validation rejects them, and an unparsable or oversized file is replaced on the
//! next write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gitpen_i18n_core::error::{I18nError, I18nResult};
use gitpen_i18n_core::traits::PreferenceStore;
use serde_json::{Map, Value};

const STORE_DIR_NAME: &str = "gitpen";
const STORE_FILE_NAME: &str = "preferences.json";
const MAX_STORE_FILE_SIZE: u64 = 1024 * 1024; // 1MB

type Entries = Map<String, Value>;

/// Preference store backed by a JSON object file.
///
/// Reads go to disk every time so that edits made by another process are
/// picked up. Writes are serialized through an internal lock and land via a
/// temp file + rename.
pub struct JsonFilePreferenceStore {
    /// Path to the store file.
    path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl JsonFilePreferenceStore {
    /// Create a store at the given file path. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        log::debug!("[i18n] Preference store path: {}", path.display());
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Platform-specific default store file.
    ///
    /// - macOS: `~/Library/Application Support/gitpen/preferences.json`
    /// - Windows: `%LOCALAPPDATA%/gitpen/preferences.json`
    /// - Linux: `~/.local/share/gitpen/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(STORE_DIR_NAME).join(STORE_FILE_NAME))
    }

    /// Path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the store file. `None` if it does not exist.
    fn file_len(&self) -> I18nResult<Option<u64>> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(Some(metadata.len())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(I18nError::StorageError(format!(
                "Failed to read store file metadata: {e}"
            ))),
        }
    }

    /// Load all entries. `None` if the file does not exist.
    fn load_entries(&self) -> I18nResult<Option<Entries>> {
        let Some(len) = self.file_len()? else {
            return Ok(None);
        };

        if len > MAX_STORE_FILE_SIZE {
            return Err(I18nError::StorageError(format!(
                "Store file too large: {len} bytes (max: {MAX_STORE_FILE_SIZE} bytes)"
            )));
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| I18nError::StorageError(format!("Failed to read store file: {e}")))?;

        if content.trim().is_empty() {
            return Ok(Some(Entries::new()));
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Ok(Some(entries)),
            Ok(_) => Err(I18nError::SerializationError(
                "Invalid store format: root must be an object".to_string(),
            )),
            Err(e) => Err(I18nError::SerializationError(format!(
                "Invalid store format: {e}"
            ))),
        }
    }

    /// Load entries for a read-modify-write cycle.
    ///
    /// A corrupt or oversized file is discarded so the write replaces it.
    fn load_entries_for_write(&self) -> I18nResult<Entries> {
        if let Some(len) = self.file_len()?.filter(|len| *len > MAX_STORE_FILE_SIZE) {
            log::warn!(
                "[i18n] Discarding oversized preference store: {len} bytes (max: {MAX_STORE_FILE_SIZE} bytes)"
            );
            return Ok(Entries::new());
        }

        match self.load_entries() {
            Ok(entries) => Ok(entries.unwrap_or_default()),
            Err(I18nError::SerializationError(msg)) => {
                log::warn!("[i18n] Discarding corrupt preference store: {msg}");
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &Entries) -> I18nResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    I18nError::StorageError(format!("Failed to create store directory: {e}"))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .map_err(|e| I18nError::StorageError(format!("Failed to write store file: {e}")))?;
        fs::rename(&tmp_path, &self.path)
            .map_err(|e| I18nError::StorageError(format!("Failed to replace store file: {e}")))
    }

    fn modify(&self, apply: impl FnOnce(&mut Entries)) -> I18nResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| I18nError::StorageError("Preference store lock poisoned".to_string()))?;

        let mut entries = self.load_entries_for_write()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl Default for JsonFilePreferenceStore {
    fn default() -> Self {
        Self::new(Self::default_path().unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME)))
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> I18nResult<Option<String>> {
        let Some(entries) = self.load_entries()? else {
            return Ok(None);
        };

        Ok(entries.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set(&self, key: &str, value: &str) -> I18nResult<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    fn remove(&self, key: &str) -> I18nResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.modify(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> I18nResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| I18nError::StorageError("Preference store lock poisoned".to_string()))?;

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(I18nError::StorageError(format!(
                "Failed to remove store file: {e}"
            ))),
        }
    }
}

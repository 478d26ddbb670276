use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::DeckError;

const APP_NAME: &str = "wordswipe";

pub const WORDS_KEY: &str = "vocab_app_words";
pub const SETTINGS_KEY: &str = "vocab_app_settings";
pub const STREAK_KEY: &str = "vocab_app_streak";

/// Durable key-value storage of text blobs. Writes are last-write-wins.
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, DeckError>;
    fn write(&mut self, key: &str, contents: &str) -> Result<(), DeckError>;
}

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// One `<key>.json` file per blob inside a directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn in_app_data_dir() -> Self {
        Self::new(get_app_data_dir())
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, DeckError> {
        let file_path = self.path_for(key);
        if !file_path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&file_path)?;
        tracing::debug!("Data loaded from: {}", file_path.display());
        Ok(Some(contents))
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<(), DeckError> {
        fs::create_dir_all(&self.dir)?;
        let file_path = self.path_for(key);
        fs::write(&file_path, contents)?;
        tracing::debug!("Data saved to: {}", file_path.display());
        Ok(())
    }
}

/// Volatile store, used by tests and when no data directory is wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(mut self, key: &str, contents: &str) -> Self {
        self.blobs.insert(key.to_string(), contents.to_string());
        self
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, DeckError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<(), DeckError> {
        self.blobs.insert(key.to_string(), contents.to_string());
        self.writes += 1;
        Ok(())
    }
}

pub fn save_json<T: Serialize + ?Sized, S: BlobStore + ?Sized>(
    store: &mut S,
    key: &str,
    data: &T,
) -> Result<(), DeckError> {
    let json = serde_json::to_string_pretty(data)?;
    store.write(key, &json)
}

/// `Ok(None)` when the key is absent.
pub fn load_json<T: for<'de> Deserialize<'de>, S: BlobStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<T>, DeckError> {
    match store.read(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Absent or unreadable blobs degrade to `default()`.
pub fn load_json_or_else<T, S, F>(store: &S, key: &str, default: F) -> T
where
    T: for<'de> Deserialize<'de>,
    S: BlobStore + ?Sized,
    F: FnOnce() -> T,
{
    match load_json::<T, S>(store, key) {
        Ok(Some(data)) => data,
        Ok(None) => default(),
        Err(e) => {
            tracing::warn!("Failed to load {}: {}. Using defaults.", key, e);
            default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        seed_words,
        Settings,
        Word,
    };

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let mut store = MemoryBlobStore::new();
        let mut words = seed_words();
        words.reverse();
        words[0].example = None;

        save_json(&mut store, WORDS_KEY, &words).unwrap();
        let loaded: Vec<Word> = load_json(&store, WORDS_KEY).unwrap().unwrap();
        assert_eq!(loaded, words);
    }

    #[test]
    fn test_absent_key_is_none() {
        let store = MemoryBlobStore::new();
        let loaded: Option<Settings> = load_json(&store, SETTINGS_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_blob_degrades_to_default() {
        let store = MemoryBlobStore::new().with_blob(SETTINGS_KEY, "{ not json");
        assert!(load_json::<Settings, _>(&store, SETTINGS_KEY).is_err());

        let settings = load_json_or_else(&store, SETTINGS_KEY, Settings::default);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_store_absent_key() {
        let dir = std::env::temp_dir().join(format!("wordswipe-test-{}", std::process::id()));
        let mut store = FileBlobStore::new(&dir);
        assert!(store.read("missing_key").unwrap().is_none());

        store.write("present_key", "[]").unwrap();
        assert_eq!(store.read("present_key").unwrap().as_deref(), Some("[]"));
        store.write("present_key", "[1]").unwrap();
        assert_eq!(store.read("present_key").unwrap().as_deref(), Some("[1]"));
        let _ = fs::remove_dir_all(&dir);
    }
}

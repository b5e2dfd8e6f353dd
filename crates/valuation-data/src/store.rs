//! Persistent key/value store with at-most-one-load lookups.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use valuation_core::error::{KeyNotFound, StoreError};
use valuation_core::types::CacheKey;

const STORE_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoreFileRef<'a, V> {
    version: u32,
    entries: BTreeMap<&'a CacheKey, &'a V>,
}

#[derive(Deserialize)]
struct StoreFile<V> {
    version: u32,
    entries: HashMap<CacheKey, V>,
}

/// In-memory cache of datasets, backed by a single file on disk.
///
/// The whole mapping is read when the store is opened and written back on
/// [`save`](Self::save). Lookups never load anything themselves: callers
/// either branch on [`get`](Self::get) or hand a loader to
/// [`get_or_load`](Self::get_or_load) / [`get_or_load_all`](Self::get_or_load_all).
#[derive(Debug)]
pub struct DataManagementSystem<V> {
    entries: HashMap<CacheKey, V>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl<V> DataManagementSystem<V> {
    /// Create an empty store with no backing file.
    pub fn in_memory() -> Self {
        Self {
            entries: HashMap::new(),
            path: None,
            dirty: false,
        }
    }

    /// Look up `key`.
    pub fn get(&self, key: &CacheKey) -> Result<&V, KeyNotFound> {
        self.entries
            .get(key)
            .ok_or_else(|| KeyNotFound(key.clone()))
    }

    /// Insert or overwrite `value` under `key`.
    pub fn add(&mut self, value: V, key: &CacheKey) {
        self.entries.insert(key.clone(), value);
        self.dirty = true;
    }

    /// Check if `key` is populated.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove an entry, returning its value.
    pub fn remove(&mut self, key: &CacheKey) -> Option<V> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.dirty = true;
        }
    }

    /// Get the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&CacheKey> {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    /// True when the in-memory mapping differs from the last save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl<V: Clone> DataManagementSystem<V> {
    /// Return the value under `key`, loading and storing it on a miss.
    ///
    /// Loader errors propagate unchanged and leave the store untouched.
    pub fn get_or_load<E, F>(&mut self, key: &CacheKey, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Ok(value) = self.get(key) {
            info!(key = %key, "Data located in store, retrieving");
            return Ok(value.clone());
        }

        info!(key = %key, "Data not yet in store, loading");
        let value = load()?;
        self.add(value.clone(), key);
        Ok(value)
    }

    /// Return the values under every key, or reload all of them together.
    ///
    /// A single absent key forces one call to `load`, and every returned
    /// value is written back under its key, replacing siblings that were
    /// already cached.
    pub fn get_or_load_all<E, F, const N: usize>(
        &mut self,
        keys: &[CacheKey; N],
        load: F,
    ) -> Result<[V; N], E>
    where
        F: FnOnce() -> Result<[V; N], E>,
    {
        if let Some(values) = self.get_all(keys) {
            info!(keys = N, "Data located in store, retrieving");
            return Ok(values);
        }

        let missing = keys.iter().filter(|k| !self.contains(k)).count();
        info!(missing, keys = N, "Data not yet in store, loading");

        let values = load()?;
        for (key, value) in keys.iter().zip(values.iter()) {
            self.add(value.clone(), key);
        }
        Ok(values)
    }

    fn get_all<const N: usize>(&self, keys: &[CacheKey; N]) -> Option<[V; N]> {
        let values: Vec<V> = keys
            .iter()
            .map(|key| self.get(key).ok().cloned())
            .collect::<Option<_>>()?;
        values.try_into().ok()
    }
}

impl<V: Serialize + DeserializeOwned> DataManagementSystem<V> {
    /// Open the store backed by `path`.
    ///
    /// A missing file gives an empty store; the file is created on the
    /// first [`save`](Self::save).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            info!("No data store at {:?}, starting empty", path);
            return Ok(Self {
                entries: HashMap::new(),
                path: Some(path),
                dirty: false,
            });
        }

        let file = File::open(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let stored: StoreFile<V> = serde_json::from_reader(BufReader::new(file))?;

        if stored.version != STORE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: stored.version,
                expected: STORE_VERSION,
            });
        }

        info!("Loaded {} entries from {:?}", stored.entries.len(), path);
        Ok(Self {
            entries: stored.entries,
            path: Some(path),
            dirty: false,
        })
    }

    /// Write the whole mapping to the backing file.
    ///
    /// The file is replaced atomically (write to `.tmp`, then rename).
    /// In-memory stores have nothing to write.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let snapshot = StoreFileRef {
            version: STORE_VERSION,
            entries: self.entries.iter().collect(),
        };

        let tmp_path = path.with_extension("tmp");
        let file = File::create(&tmp_path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &snapshot)?;
        writer.flush().map_err(io_err)?;
        drop(writer);

        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            io_err(e)
        })?;

        info!("Saved {} entries to {:?}", self.entries.len(), path);
        self.dirty = false;
        Ok(())
    }
}

impl<V> Default for DataManagementSystem<V> {
    fn default() -> Self {
        Self::in_memory()
    }
}

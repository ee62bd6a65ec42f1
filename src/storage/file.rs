// ABOUTME: Key-value store persisted as a single JSON object file
// ABOUTME: Loads on open, rewrites atomically through a temp file and rename on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};
use vitarva_core::errors::{AppError, AppResult};

use super::KeyValueStore;

/// File-backed store.
///
/// A reader never observes a half-written file: updates are written to a
/// sibling temp file which then replaces the original. The in-memory map only
/// changes once the file write succeeded.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if the file does not exist yet
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file exists but cannot be read or is
    /// not a JSON object of strings
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::storage(format!("Store file {} is corrupt: {e}", path.display()))
                    .with_source(e)
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file absent, starting empty");
                BTreeMap::new()
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read store file {}: {e}",
                    path.display()
                ))
                .with_source(e))
            }
        };

        info!(path = %path.display(), keys = entries.len(), "Opened key-value store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::internal("Key-value store lock poisoned"))
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("Failed to create {}: {e}", parent.display()))
                    .with_source(e)
            })?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", tmp.display())).with_source(e)
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::storage(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            ))
            .with_source(e)
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<bool> {
        let mut entries = self.lock()?;
        if !entries.contains_key(key) {
            return Ok(false);
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(true)
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

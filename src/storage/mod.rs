// ABOUTME: Key-value storage abstraction for practice-local state
// ABOUTME: Pluggable backends (in-memory, JSON file) plus the appointment book and auth session on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # Local Storage
//!
//! Appointments and the practitioner session live in a small string
//! key-value store. Every key the toolkit writes is namespaced under
//! `vitarva:` so a logout can wipe them without touching anything else.
//!
//! ```rust,no_run
//! use vitarva::storage::{AppointmentBook, MemoryStore};
//! use vitarva_core::models::NewAppointment;
//! # fn example(new: NewAppointment) -> vitarva_core::errors::AppResult<()> {
//! let book = AppointmentBook::new(MemoryStore::new());
//! let created = book.create(new)?;
//! assert_eq!(book.get(created.id)?, created);
//! # Ok(())
//! # }
//! ```

/// Appointment CRUD over a key-value store
pub mod appointments;
/// Login flag and practitioner profile
pub mod auth;
/// Single JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use appointments::AppointmentBook;
pub use auth::{AuthSession, PractitionerProfile};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use vitarva_core::errors::{AppError, AppResult};

/// String key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a value, reporting whether it existed
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<bool>;

    /// Every stored key, sorted
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the backend cannot be read
    fn keys(&self) -> AppResult<Vec<String>>;

    /// Read and decode a JSON value
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if the stored text is not the expected
    /// JSON shape
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        self.get(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| {
                    AppError::serialization(format!("Stored value under '{key}' is unreadable: {e}"))
                        .with_source(e)
                })
            })
            .transpose()
    }

    /// Encode and write a JSON value
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if encoding fails, otherwise as
    /// [`KeyValueStore::set`]
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    /// Delete every key starting with `prefix`, returning how many went
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the backend cannot be written
    fn clear_prefix(&self, prefix: &str) -> AppResult<usize> {
        let mut removed = 0;
        for key in self.keys()?.into_iter().filter(|k| k.starts_with(prefix)) {
            if self.remove(&key)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

// ABOUTME: Practitioner login state kept in the key-value store
// ABOUTME: Login flag plus profile, with logout wiping every namespaced key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use serde::{Deserialize, Serialize};
use tracing::info;
use vitarva_core::constants::storage::{AUTH_FLAG_KEY, NAMESPACE, PRACTITIONER_KEY};
use vitarva_core::errors::{AppError, AppResult};

use super::KeyValueStore;

/// Signed-in practitioner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerProfile {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Role, e.g. "Ayurvedic Dietitian"
    pub role: String,
}

impl PractitionerProfile {
    /// Build a profile
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("Practitioner name must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(AppError::invalid_input(format!(
                "'{}' is not an email address",
                self.email
            )));
        }
        Ok(())
    }
}

/// Login state over any [`KeyValueStore`].
///
/// Authentication itself is out of scope: `login` records whoever is
/// presented, exactly as the practice front end does.
#[derive(Debug, Clone)]
pub struct AuthSession<S> {
    store: S,
}

impl<S: KeyValueStore> AuthSession<S> {
    /// Session over `store`
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a signed-in practitioner
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a blank name or malformed email,
    /// `STORAGE_ERROR` if the store cannot be written
    pub fn login(&self, profile: &PractitionerProfile) -> AppResult<()> {
        profile.validate()?;
        self.store.set_json(PRACTITIONER_KEY, profile)?;
        self.store.set(AUTH_FLAG_KEY, "true")?;
        info!(email = %profile.email, "Practitioner signed in");
        Ok(())
    }

    /// Whether someone is signed in
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the store cannot be read
    pub fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.store.get(AUTH_FLAG_KEY)?.as_deref() == Some("true"))
    }

    /// The signed-in practitioner, if any
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if the stored profile is unreadable
    pub fn practitioner(&self) -> AppResult<Option<PractitionerProfile>> {
        if !self.is_authenticated()? {
            return Ok(None);
        }
        self.store.get_json(PRACTITIONER_KEY)
    }

    /// Sign out and wipe every namespaced key, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the store cannot be written
    pub fn logout(&self) -> AppResult<usize> {
        let removed = self.store.clear_prefix(NAMESPACE)?;
        info!(removed, "Practitioner signed out");
        Ok(removed)
    }
}

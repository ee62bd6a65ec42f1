// ABOUTME: Appointment book persisted as one JSON list in the key-value store
// ABOUTME: Create, read, update, delete, and schedule-ordered listing of appointments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;
use vitarva_core::constants::storage::APPOINTMENTS_KEY;
use vitarva_core::errors::{AppError, AppResult, ErrorCode};
use vitarva_core::models::{Appointment, AppointmentPatch, NewAppointment};

use super::KeyValueStore;

/// Appointment CRUD over any [`KeyValueStore`].
///
/// The whole book is one stored list, so every write is a read-modify-write.
/// Writes are serialized across a book and its clones; separate books or
/// processes writing the same store concurrently can still lose updates.
#[derive(Debug, Clone)]
pub struct AppointmentBook<S> {
    store: S,
    writes: Arc<Mutex<()>>,
}

impl<S: KeyValueStore> AppointmentBook<S> {
    /// Book over `store`
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Stored list; unreadable data is logged and treated as empty
    fn read_all(&self) -> AppResult<Vec<Appointment>> {
        match self.store.get_json::<Vec<Appointment>>(APPOINTMENTS_KEY) {
            Ok(list) => Ok(list.unwrap_or_default()),
            Err(e) if e.code == ErrorCode::SerializationError => {
                warn!(error = %e, key = APPOINTMENTS_KEY, "Stored appointments unreadable, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write_guard(&self) -> AppResult<MutexGuard<'_, ()>> {
        self.writes
            .lock()
            .map_err(|_| AppError::internal("Appointment book lock poisoned"))
    }

    fn write_all(&self, appointments: &[Appointment]) -> AppResult<()> {
        self.store.set_json(APPOINTMENTS_KEY, &appointments)
    }

    /// Every appointment ordered by date, then time
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the store cannot be read
    pub fn list(&self) -> AppResult<Vec<Appointment>> {
        let mut appointments = self.read_all()?;
        appointments.sort_by(Appointment::schedule_order);
        Ok(appointments)
    }

    /// Appointments on one day, ordered by time
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the store cannot be read
    pub fn on_date(&self, date: NaiveDate) -> AppResult<Vec<Appointment>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|a| a.date == date)
            .collect())
    }

    /// One appointment by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no appointment has this id
    pub fn get(&self, id: Uuid) -> AppResult<Appointment> {
        self.read_all()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Validate and store a new appointment
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for invalid fields, `STORAGE_ERROR` if the
    /// store cannot be written
    pub fn create(&self, new: NewAppointment) -> AppResult<Appointment> {
        let appointment = new.into_appointment()?;
        let _guard = self.write_guard()?;
        let mut all = self.read_all()?;
        all.push(appointment.clone());
        self.write_all(&all)?;
        info!(id = %appointment.id, date = %appointment.date, "Created appointment");
        Ok(appointment)
    }

    /// Apply a partial update
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown id, `INVALID_INPUT` if the
    /// patch is invalid (nothing is written then)
    pub fn update(&self, id: Uuid, patch: AppointmentPatch) -> AppResult<Appointment> {
        let _guard = self.write_guard()?;
        let mut all = self.read_all()?;
        let slot = all
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;
        patch.apply(slot)?;
        let updated = slot.clone();
        self.write_all(&all)?;
        info!(id = %id, "Updated appointment");
        Ok(updated)
    }

    /// Delete an appointment, reporting whether it existed
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the store cannot be written
    pub fn delete(&self, id: Uuid) -> AppResult<bool> {
        let _guard = self.write_guard()?;
        let mut all = self.read_all()?;
        let before = all.len();
        all.retain(|a| a.id != id);
        if all.len() == before {
            return Ok(false);
        }
        self.write_all(&all)?;
        info!(id = %id, "Deleted appointment");
        Ok(true)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Appointment {id}"))
}

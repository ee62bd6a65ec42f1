// ABOUTME: Appointment book commands over the local store
// ABOUTME: List, add, update, and delete appointments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;
use vitarva::config::AppConfig;
use vitarva::storage::AppointmentBook;
use vitarva_core::errors::AppResult;
use vitarva_core::models::{AppointmentPatch, NewAppointment};

use super::{open_store, print_json};

pub fn list(config: &AppConfig, date: Option<NaiveDate>) -> AppResult<()> {
    let book = AppointmentBook::new(open_store(config)?);
    let appointments = match date {
        Some(day) => book.on_date(day)?,
        None => book.list()?,
    };
    print_json(&appointments)
}

pub fn add(
    config: &AppConfig,
    patient_name: String,
    date: NaiveDate,
    time: String,
    kind: String,
    notes: Option<String>,
) -> AppResult<()> {
    let book = AppointmentBook::new(open_store(config)?);
    let appointment = book.create(NewAppointment {
        patient_name,
        date,
        time,
        kind,
        notes,
    })?;
    print_json(&appointment)
}

pub fn update(
    config: &AppConfig,
    id: Uuid,
    date: Option<NaiveDate>,
    time: Option<String>,
    notes: Option<String>,
) -> AppResult<()> {
    let book = AppointmentBook::new(open_store(config)?);
    let appointment = book.update(
        id,
        AppointmentPatch {
            date,
            time,
            notes,
            ..AppointmentPatch::default()
        },
    )?;
    print_json(&appointment)
}

pub fn delete(config: &AppConfig, id: Uuid) -> AppResult<()> {
    let book = AppointmentBook::new(open_store(config)?);
    let deleted = book.delete(id)?;
    print_json(&json!({ "id": id, "deleted": deleted }))
}

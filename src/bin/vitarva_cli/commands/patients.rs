// ABOUTME: Read-only patient-record commands
// ABOUTME: Lists patients, shows one patient, and prints a patient's notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use vitarva::config::AppConfig;
use vitarva::patients::{HttpPatientRecordStore, PatientRecordStore};
use vitarva_core::errors::AppResult;

use super::print_json;

pub async fn list(config: &AppConfig) -> AppResult<()> {
    let store = HttpPatientRecordStore::new(&config.patient_api)?;
    print_json(&store.list().await?)
}

pub async fn show(config: &AppConfig, id: &str) -> AppResult<()> {
    let store = HttpPatientRecordStore::new(&config.patient_api)?;
    print_json(&store.get(id).await?)
}

pub async fn notes(config: &AppConfig, id: &str) -> AppResult<()> {
    let store = HttpPatientRecordStore::new(&config.patient_api)?;
    print_json(&store.notes(id).await?)
}

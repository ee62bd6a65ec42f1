// ABOUTME: Patient-record boundary to the external practice REST service
// ABOUTME: PatientRecordStore contract and its HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # Patient Records
//!
//! Patient records are owned by a remote service. This module is the only
//! place that talks to it, and every payload it returns is validated into a
//! [`PatientRecord`] before callers see it.

mod http;

pub use http::HttpPatientRecordStore;

use async_trait::async_trait;
use vitarva_core::errors::AppResult;
use vitarva_core::models::{ConstitutionScore, PatientNote, PatientRecord};

/// Patient-record service contract
#[async_trait]
pub trait PatientRecordStore: Send + Sync {
    /// Every patient
    async fn list(&self) -> AppResult<Vec<PatientRecord>>;

    /// One patient by service id
    async fn get(&self, id: &str) -> AppResult<PatientRecord>;

    /// Create or replace a patient
    async fn upsert(&self, patient: &PatientRecord) -> AppResult<()>;

    /// Store a new constitution score for a patient
    async fn update_dosha(&self, id: &str, score: ConstitutionScore) -> AppResult<()>;

    /// Practitioner notes for a patient
    async fn notes(&self, id: &str) -> AppResult<Vec<PatientNote>>;

    /// Attach a practitioner note
    async fn add_note(&self, id: &str, note: &PatientNote) -> AppResult<()>;
}

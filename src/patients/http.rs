// ABOUTME: HTTP client for the practice patient-record REST service
// ABOUTME: JSON requests with timeout, status mapping, and validation of every returned record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, instrument};
use vitarva_core::errors::{AppError, AppResult, ErrorCode};
use vitarva_core::models::{ConstitutionScore, PatientNote, PatientRecord};

use super::PatientRecordStore;
use crate::config::PatientApiConfig;

const SERVICE_NAME: &str = "Patient API";

#[derive(Deserialize)]
struct PatientListEnvelope {
    #[serde(default)]
    patients: Vec<Value>,
}

#[derive(Deserialize)]
struct PatientEnvelope {
    patient: Value,
}

#[derive(Deserialize)]
struct NotesEnvelope {
    #[serde(default)]
    notes: Vec<PatientNote>,
}

/// REST implementation of [`PatientRecordStore`]
pub struct HttpPatientRecordStore {
    base_url: String,
    client: Client,
}

impl HttpPatientRecordStore {
    /// Client for the configured service
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the HTTP client cannot be built
    pub fn new(config: &PatientApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AppError::config_invalid(format!("Cannot build patient API client: {e}"))
                    .with_source(e)
            })?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Service base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and return the JSON body of a successful response
    async fn send(&self, request: RequestBuilder, what: &str) -> AppResult<Value> {
        let response = request.send().await.map_err(|e| {
            AppError::external_unavailable(SERVICE_NAME, format!("{what} failed: {e}"))
                .with_source(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::external_unavailable(SERVICE_NAME, format!("{what}: unreadable body: {e}"))
                .with_source(e)
        })?;

        if !status.is_success() {
            error!(status = %status, what, "Patient API error");
            return Err(map_status(status, what, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("{what}: response is not JSON: {e}"))
                .with_source(e)
        })
    }
}

impl fmt::Debug for HttpPatientRecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPatientRecordStore")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PatientRecordStore for HttpPatientRecordStore {
    #[instrument(skip(self))]
    async fn list(&self) -> AppResult<Vec<PatientRecord>> {
        let body = self
            .send(self.client.get(self.url("/patients")), "List patients")
            .await?;
        let patients = parse_patient_list(body)?;
        debug!(count = patients.len(), "Fetched patients");
        Ok(patients)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> AppResult<PatientRecord> {
        let id = checked_id(id)?;
        let body = self
            .send(self.client.get(self.url(&format!("/patient/{id}"))), "Get patient")
            .await?;
        parse_patient(body)
    }

    #[instrument(skip(self, patient), fields(name = %patient.name))]
    async fn upsert(&self, patient: &PatientRecord) -> AppResult<()> {
        patient.validate()?;
        self.send(
            self.client.post(self.url("/add_patient")).json(patient),
            "Save patient",
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_dosha(&self, id: &str, score: ConstitutionScore) -> AppResult<()> {
        let id = checked_id(id)?;
        self.send(
            self.client
                .patch(self.url(&format!("/patients/{id}/dosha")))
                .json(&json!({ "dosha": score })),
            "Update dosha",
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn notes(&self, id: &str) -> AppResult<Vec<PatientNote>> {
        let id = checked_id(id)?;
        let body = self
            .send(
                self.client.get(self.url(&format!("/patients/{id}/notes"))),
                "List notes",
            )
            .await?;
        parse_notes(body)
    }

    #[instrument(skip(self, note))]
    async fn add_note(&self, id: &str, note: &PatientNote) -> AppResult<()> {
        let id = checked_id(id)?;
        if note.note.trim().is_empty() {
            return Err(AppError::invalid_input("Note text must not be empty"));
        }
        self.send(
            self.client
                .post(self.url(&format!("/patients/{id}/notes")))
                .json(&json!({ "note": note.note, "author": note.author })),
            "Add note",
        )
        .await?;
        Ok(())
    }
}

/// Reject ids that would change the request path
fn checked_id(id: &str) -> AppResult<&str> {
    let id = id.trim();
    if id.is_empty()
        || !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::invalid_input(format!("Invalid patient id '{id}'")));
    }
    Ok(id)
}

fn map_status(status: StatusCode, what: &str, body: &str) -> AppError {
    let code = match status {
        StatusCode::NOT_FOUND => ErrorCode::ResourceNotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorCode::ExternalAuthFailed,
        StatusCode::TOO_MANY_REQUESTS => ErrorCode::ExternalRateLimited,
        s if s.is_server_error() => ErrorCode::ExternalServiceUnavailable,
        _ => ErrorCode::ExternalServiceError,
    };
    AppError::new(code, format!("{SERVICE_NAME}: {what} returned {status}"))
        .with_details(json!({ "status": status.as_u16(), "body": body }))
}

fn envelope<T: serde::de::DeserializeOwned>(body: Value, what: &str) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| {
        AppError::invalid_format(format!("{SERVICE_NAME}: unexpected {what} payload: {e}"))
            .with_source(e)
    })
}

fn parse_patient_list(body: Value) -> AppResult<Vec<PatientRecord>> {
    let envelope: PatientListEnvelope = envelope(body, "patient list")?;
    envelope
        .patients
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            PatientRecord::from_api_value(value).map_err(|e| {
                let message = format!("Patient #{index} rejected: {}", e.message);
                AppError::new(e.code, message).with_details(json!({ "index": index }))
            })
        })
        .collect()
}

fn parse_patient(body: Value) -> AppResult<PatientRecord> {
    let envelope: PatientEnvelope = envelope(body, "patient")?;
    PatientRecord::from_api_value(envelope.patient)
}

fn parse_notes(body: Value) -> AppResult<Vec<PatientNote>> {
    let envelope: NotesEnvelope = envelope(body, "notes")?;
    Ok(envelope.notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_validated() {
        let body = json!({
            "patients": [
                {"_id": "a1", "name": "Asha", "age": 34, "gender": "Female", "phone": "98",
                 "dosha": {"vata": 50, "pitta": 30, "kapha": 20}},
                {"_id": "b2", "name": "Ravi", "age": 41, "gender": "Male", "phone": "97"}
            ]
        });
        let patients = parse_patient_list(body).unwrap();
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].id.as_deref(), Some("a1"));
    }

    #[test]
    fn test_list_rejects_invalid_record() {
        let body = json!({
            "patients": [
                {"_id": "a1", "name": "Asha", "age": 34, "gender": "Female", "phone": "98"},
                {"_id": "b2", "name": "Ravi", "age": 41, "gender": "Male", "phone": "97",
                 "dosha": {"vata": 90, "pitta": 90, "kapha": 90}}
            ]
        });
        let err = parse_patient_list(body).unwrap_err();
        assert_eq!(err.details["index"], 1);
    }

    #[test]
    fn test_single_patient_envelope() {
        let body = json!({"patient": {"_id": "c3", "name": "Meera", "age": 29, "gender": "Female", "phone": "96"}});
        assert_eq!(parse_patient(body).unwrap().name, "Meera");

        let err = parse_patient(json!({"patients": []})).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_notes_envelope_accepts_legacy_fields() {
        let body = json!({"notes": [{"text": "Improved sleep", "date": "2025-01-04"}]});
        let notes = parse_notes(body).unwrap();
        assert_eq!(notes[0].note, "Improved sleep");
        assert_eq!(notes[0].created_at.as_deref(), Some("2025-01-04"));
    }

    #[test]
    fn test_ids_cannot_escape_path() {
        assert!(checked_id("../admin").is_err());
        assert!(checked_id(" ").is_err());
        assert_eq!(checked_id("65f0c2ab").unwrap(), "65f0c2ab");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            map_status(StatusCode::NOT_FOUND, "Get patient", "").code,
            ErrorCode::ResourceNotFound
        );
        assert_eq!(
            map_status(StatusCode::BAD_GATEWAY, "Get patient", "").code,
            ErrorCode::ExternalServiceUnavailable
        );
        assert_eq!(
            map_status(StatusCode::BAD_REQUEST, "Save patient", "bad").code,
            ErrorCode::ExternalServiceError
        );
    }
}

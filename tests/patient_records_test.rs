// ABOUTME: Integration tests for the patient-record HTTP client that need no live service
// ABOUTME: Input checks that must fail before any request is sent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use vitarva::config::PatientApiConfig;
use vitarva::patients::{HttpPatientRecordStore, PatientRecordStore};
use vitarva_core::errors::ErrorCode;
use vitarva_core::models::{PatientNote, PatientRecord};

// Nothing listens on the discard port
fn offline_store() -> HttpPatientRecordStore {
    HttpPatientRecordStore::new(&PatientApiConfig {
        base_url: "http://127.0.0.1:9/".to_owned(),
        timeout: Duration::from_secs(1),
    })
    .unwrap()
}

#[test]
fn test_base_url_normalized() {
    assert_eq!(offline_store().base_url(), "http://127.0.0.1:9");
}

#[tokio::test]
async fn test_path_escaping_ids_rejected() {
    let store = offline_store();

    let err = store.get("../admin").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = store.notes("a/b").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_blank_note_rejected() {
    let store = offline_store();
    let err = store
        .add_note("65f0c2ab", &PatientNote::new("   ", None))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_invalid_patient_not_sent() {
    let store = offline_store();
    let err = store.upsert(&PatientRecord::new("", 34)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_unreachable_service_is_unavailable() {
    let store = offline_store();
    let err = store.list().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

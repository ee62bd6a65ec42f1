// ABOUTME: Integration tests for environment configuration
// ABOUTME: Defaults, overrides, invalid values, and API key redaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;
use vitarva::config::environment::{defaults, keys};
use vitarva::config::{AppConfig, AssistantConfig};
use vitarva_core::errors::ErrorCode;

const ALL_KEYS: [&str; 7] = [
    keys::GEMINI_API_KEY,
    keys::GEMINI_MODEL,
    keys::GEMINI_API_BASE_URL,
    keys::PATIENT_API_BASE_URL,
    keys::PATIENT_API_TIMEOUT_SECS,
    keys::FOOD_LIBRARY,
    keys::DATA_DIR,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert!(!config.assistant.is_configured());
    assert_eq!(config.assistant.model, defaults::GEMINI_MODEL);
    assert_eq!(config.assistant.base_url, defaults::GEMINI_API_BASE_URL);
    assert_eq!(config.patient_api.base_url, defaults::PATIENT_API_BASE_URL);
    assert_eq!(
        config.patient_api.timeout,
        Duration::from_secs(defaults::PATIENT_API_TIMEOUT_SECS)
    );
    assert_eq!(
        config.storage.store_path(),
        PathBuf::from(defaults::DATA_DIR).join(defaults::STORE_FILE)
    );
    assert!(config.storage.food_library.is_none());
}

#[test]
#[serial]
fn test_overrides_applied() {
    clear_env();
    env::set_var(keys::GEMINI_API_KEY, "  secret-key  ");
    env::set_var(keys::GEMINI_MODEL, "gemini-2.0-pro");
    env::set_var(keys::PATIENT_API_BASE_URL, "http://localhost:5000/");
    env::set_var(keys::PATIENT_API_TIMEOUT_SECS, "5");
    env::set_var(keys::DATA_DIR, "/tmp/vitarva-test");
    env::set_var(keys::FOOD_LIBRARY, "/tmp/foods.json");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.assistant.require_api_key().unwrap(), "secret-key");
    assert_eq!(config.assistant.model, "gemini-2.0-pro");
    assert_eq!(config.patient_api.base_url, "http://localhost:5000");
    assert_eq!(config.patient_api.timeout, Duration::from_secs(5));
    assert_eq!(
        config.storage.store_path(),
        PathBuf::from("/tmp/vitarva-test").join(defaults::STORE_FILE)
    );
    assert_eq!(
        config.storage.food_library,
        Some(PathBuf::from("/tmp/foods.json"))
    );
}

#[test]
#[serial]
fn test_blank_api_key_is_missing() {
    clear_env();
    env::set_var(keys::GEMINI_API_KEY, "   ");

    let assistant = AssistantConfig::from_env().unwrap();
    clear_env();

    assert!(!assistant.is_configured());
    assert_eq!(
        assistant.require_api_key().unwrap_err().code,
        ErrorCode::ConfigMissing
    );
}

#[test]
#[serial]
fn test_invalid_values_rejected() {
    clear_env();
    env::set_var(keys::PATIENT_API_TIMEOUT_SECS, "0");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_env();
    env::set_var(keys::GEMINI_API_BASE_URL, "ftp://files.example.org");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
fn test_debug_redacts_api_key() {
    let assistant = AssistantConfig {
        api_key: Some("super-secret".to_owned()),
        ..AssistantConfig::default()
    };
    let rendered = format!("{assistant:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains(defaults::GEMINI_MODEL));
}

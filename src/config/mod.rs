// ABOUTME: Configuration module for runtime settings of the Vitarva toolkit
// ABOUTME: Environment-only configuration for the assistant, patient API, and local storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! Configuration module for Vitarva
//!
//! All settings come from environment variables; there are no config files.
//!
//! - **Assistant**: Gemini credentials and model selection
//! - **Patient API**: base URL and timeout of the patient-record service
//! - **Storage**: local data directory and optional food table override

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, AssistantConfig, PatientApiConfig, StorageConfig};

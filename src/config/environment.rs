// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses Gemini, patient API, and storage settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! Environment-based configuration

use std::env;
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};
use url::Url;
use vitarva_core::errors::{AppError, AppResult};

/// Environment variable names
pub mod keys {
    /// Gemini API key (secret)
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini model name
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Gemini API base URL
    pub const GEMINI_API_BASE_URL: &str = "GEMINI_API_BASE_URL";
    /// Patient-record service base URL
    pub const PATIENT_API_BASE_URL: &str = "PATIENT_API_BASE_URL";
    /// Patient-record request timeout in seconds
    pub const PATIENT_API_TIMEOUT_SECS: &str = "PATIENT_API_TIMEOUT_SECS";
    /// Optional food table file replacing the bundled one
    pub const FOOD_LIBRARY: &str = "VITARVA_FOOD_LIBRARY";
    /// Directory for the local key-value file store
    pub const DATA_DIR: &str = "VITARVA_DATA_DIR";
}

/// Default values used when a variable is unset
pub mod defaults {
    /// Gemini model
    pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
    /// Gemini API base URL
    pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Patient-record service
    pub const PATIENT_API_BASE_URL: &str = "https://ayurveda-be.onrender.com";
    /// Patient-record request timeout
    pub const PATIENT_API_TIMEOUT_SECS: u64 = 30;
    /// Local data directory
    pub const DATA_DIR: &str = ".vitarva";
    /// File name of the key-value store inside the data directory
    pub const STORE_FILE: &str = "store.json";
}

/// Complete runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// AyurBot assistant settings
    pub assistant: AssistantConfig,
    /// Patient-record service settings
    pub patient_api: PatientApiConfig,
    /// Local storage settings
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a set variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            assistant: AssistantConfig::from_env()?,
            patient_api: PatientApiConfig::from_env()?,
            storage: StorageConfig::from_env(),
        };

        debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

/// Gemini assistant configuration
#[derive(Clone)]
pub struct AssistantConfig {
    /// API key; absent until the operator provides one
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// API base URL without trailing slash
    pub base_url: String,
}

impl AssistantConfig {
    /// Read the assistant section
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the base URL is malformed
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            api_key: optional_env(keys::GEMINI_API_KEY),
            model: env_var_or(keys::GEMINI_MODEL, defaults::GEMINI_MODEL),
            base_url: parse_base_url(
                keys::GEMINI_API_BASE_URL,
                &env_var_or(keys::GEMINI_API_BASE_URL, defaults::GEMINI_API_BASE_URL),
            )?,
        })
    }

    /// Whether an API key is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// The API key, required for any assistant call
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if no key was configured
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::config_missing(format!(
                "{} environment variable not set",
                keys::GEMINI_API_KEY
            ))
        })
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: defaults::GEMINI_MODEL.to_owned(),
            base_url: defaults::GEMINI_API_BASE_URL.to_owned(),
        }
    }
}

impl Debug for AssistantConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Patient-record service configuration
#[derive(Debug, Clone)]
pub struct PatientApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl PatientApiConfig {
    /// Read the patient API section
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` for a malformed URL or a non-positive timeout
    pub fn from_env() -> AppResult<Self> {
        let base_url = parse_base_url(
            keys::PATIENT_API_BASE_URL,
            &env_var_or(keys::PATIENT_API_BASE_URL, defaults::PATIENT_API_BASE_URL),
        )?;
        let timeout = match optional_env(keys::PATIENT_API_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(defaults::PATIENT_API_TIMEOUT_SECS),
        };
        Ok(Self { base_url, timeout })
    }
}

impl Default for PatientApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::PATIENT_API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(defaults::PATIENT_API_TIMEOUT_SECS),
        }
    }
}

/// Local storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the key-value store file
    pub data_dir: PathBuf,
    /// Food table replacing the bundled one
    pub food_library: Option<PathBuf>,
}

impl StorageConfig {
    /// Read the storage section
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(env_var_or(keys::DATA_DIR, defaults::DATA_DIR)),
            food_library: optional_env(keys::FOOD_LIBRARY).map(PathBuf::from),
        }
    }

    /// Path of the key-value store file
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(defaults::STORE_FILE)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            food_library: None,
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_owned())
}

/// Non-blank environment variable
fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Validate an http(s) base URL and strip the trailing slash
fn parse_base_url(key: &str, raw: &str) -> AppResult<String> {
    let url = Url::parse(raw).map_err(|e| {
        AppError::config_invalid(format!("{key} is not a valid URL: {e}")).with_source(e)
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "{key} must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_timeout(raw: &str) -> AppResult<Duration> {
    let secs: u64 = raw.parse().map_err(|e| {
        AppError::config_invalid(format!(
            "Invalid {} value '{raw}'",
            keys::PATIENT_API_TIMEOUT_SECS
        ))
        .with_source(e)
    })?;
    if secs == 0 {
        return Err(AppError::config_invalid(format!(
            "{} must be greater than zero",
            keys::PATIENT_API_TIMEOUT_SECS
        )));
    }
    Ok(Duration::from_secs(secs))
}

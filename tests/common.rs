// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, a scripted LLM provider, temporary stores, and sample records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `vitarva`

use std::collections::VecDeque;
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use chrono::NaiveDate;
use tempfile::TempDir;
use vitarva::llm::{ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, TokenUsage};
use vitarva::storage::JsonFileStore;
use vitarva_core::errors::{AppError, AppResult};
use vitarva_core::models::NewAppointment;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Provider that answers from a script and records every request it sees
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<AppResult<String>>>,
    seen: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: impl IntoIterator<Item = AppResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Provider that always answers `reply`
    pub fn echoing(reply: &str, times: usize) -> Self {
        Self::new((0..times).map(|_| Ok(reply.to_owned())))
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.requests()
            .last()
            .map(|r| r.messages.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::text_only()
    }

    fn default_model(&self) -> &str {
        "scripted-1"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.seen.lock().unwrap().push(request.clone());
        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("Script exhausted")))?;
        Ok(ChatResponse {
            content: next,
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.default_model().to_owned()),
            usage: Some(TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            finish_reason: Some("STOP".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// File-backed store in a fresh temporary directory
pub fn temp_file_store() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();
    (dir, store)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_appointment(patient: &str, day: NaiveDate, time: &str) -> NewAppointment {
    NewAppointment {
        patient_name: patient.to_owned(),
        date: day,
        time: time.to_owned(),
        kind: "Consultation".to_owned(),
        notes: None,
    }
}

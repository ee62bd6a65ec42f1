// ABOUTME: Command implementations for vitarva-cli
// ABOUTME: Shared JSON output and store helpers used by every subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

pub mod appointments;
pub mod assessment;
pub mod chat;
pub mod patients;
pub mod plan;
pub mod session;

use serde::Serialize;
use vitarva::config::AppConfig;
use vitarva::storage::JsonFileStore;
use vitarva_core::errors::AppResult;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// The practice key-value store under the configured data directory
pub fn open_store(config: &AppConfig) -> AppResult<JsonFileStore> {
    JsonFileStore::open(config.storage.store_path())
}

// ABOUTME: Practitioner session commands over the local store
// ABOUTME: Login records a profile, show prints it, logout clears every namespaced key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use serde_json::json;
use vitarva::config::AppConfig;
use vitarva::storage::{AuthSession, PractitionerProfile};
use vitarva_core::errors::AppResult;

use super::{open_store, print_json};

pub fn login(config: &AppConfig, name: String, email: String, role: String) -> AppResult<()> {
    let session = AuthSession::new(open_store(config)?);
    let profile = PractitionerProfile::new(name, email, role);
    session.login(&profile)?;
    print_json(&profile)
}

pub fn show(config: &AppConfig) -> AppResult<()> {
    let session = AuthSession::new(open_store(config)?);
    print_json(&json!({
        "authenticated": session.is_authenticated()?,
        "practitioner": session.practitioner()?,
    }))
}

pub fn logout(config: &AppConfig) -> AppResult<()> {
    let session = AuthSession::new(open_store(config)?);
    let removed = session.logout()?;
    print_json(&json!({ "removed": removed }))
}

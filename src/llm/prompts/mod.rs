// ABOUTME: System prompt for the AyurBot assistant loaded at compile time
// ABOUTME: Identity, capabilities, response guidelines, and disclaimers for practitioner chat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// AyurBot system prompt
///
/// Contains the assistant's identity, clinical scope, formatting style and
/// the disclaimers it must repeat to practitioners.
pub const AYURBOT_SYSTEM_PROMPT: &str = include_str!("ayurbot_system.md");

/// Get the system prompt that opens every AyurBot conversation
#[must_use]
pub const fn ayurbot_system_prompt() -> &'static str {
    AYURBOT_SYSTEM_PROMPT
}

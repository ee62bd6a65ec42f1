// ABOUTME: Main library entry point for the Vitarva Ayurvedic practice toolkit
// ABOUTME: Ambient services around the rules engine: config, logging, assistant chat, storage, patients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

#![deny(unsafe_code)]

//! # Vitarva
//!
//! Practice toolkit for Ayurvedic clinicians. The rules engine lives in two
//! workspace crates and is re-exported here:
//!
//! - [`vitarva_core`]: error types, rule constants, and the shared data model
//! - [`vitarva_intelligence`]: the constitution scorer and diet plan generator
//!
//! This crate adds the services around it:
//!
//! - **Config**: environment-only configuration
//! - **Logging**: `tracing` subscriber setup
//! - **LLM**: provider contract and the Gemini provider
//! - **Chat**: caller-owned AyurBot conversations
//! - **Storage**: key-value stores, appointment book, practitioner session
//! - **Patients**: client for the remote patient-record service
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vitarva::vitarva_core::models::{ConstitutionScore, DietaryPreferences};
//! use vitarva::vitarva_intelligence::{DietPlanGenerator, FoodLibrary};
//!
//! # fn main() -> vitarva::vitarva_core::errors::AppResult<()> {
//! let library = FoodLibrary::embedded()?;
//! let score = ConstitutionScore::new(55, 30, 15)?;
//! let plan = DietPlanGenerator::new(&library)
//!     .generate_with_thread_rng(score, &DietaryPreferences::new());
//! println!("{}", plan.morning.main_grain);
//! # Ok(())
//! # }
//! ```

/// Chat session with bounded history and fallback replies
pub mod chat;

/// Environment configuration
pub mod config;

/// LLM provider abstraction and Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Patient-record service boundary
pub mod patients;

/// Key-value storage, appointments, and practitioner session
pub mod storage;

pub use vitarva_core;
pub use vitarva_intelligence;

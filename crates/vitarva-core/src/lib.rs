// ABOUTME: Core types and constants for the Vitarva Ayurvedic practice toolkit
// ABOUTME: Foundation crate with error handling, named rule constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

#![deny(unsafe_code)]

//! # Vitarva Core
//!
//! Foundation crate providing shared types and constants for the Vitarva
//! practice toolkit. It has no I/O and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Rule numbers organized by domain
//! - **models**: Dosha scores, food table rows, diet plans, patients, appointments

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;

// ABOUTME: Core data models for the Vitarva rules engine and practice services
// ABOUTME: Re-exports Dosha, ConstitutionScore, FoodItem, DietPlan, PatientRecord and Appointment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # Data Models
//!
//! Shared value types passed between the assessment engine, the diet plan
//! generator, and the practice services.
//!
//! ## Core Models
//!
//! - `ConstitutionScore`: validated three-axis percentages
//! - `FoodItem`: one row of the static food table
//! - `DietaryPreferences`: restrictions supplied per generation request
//! - `DietPlan`: three meal slots plus nutrition and guidelines
//! - `PatientRecord`: versioned record validated at the REST boundary
//! - `Appointment`: schedule entry kept in the key-value store

mod appointment;
mod diet_plan;
mod dosha;
mod food;
mod patient;
mod preferences;

pub use appointment::{Appointment, AppointmentPatch, NewAppointment};
pub use diet_plan::{DietPlan, MacroRange, MealSlot, MealSlotKind, NutritionSummary};
pub use dosha::{dominant_of, ConstitutionScore, Dosha};
pub use food::{DoshaEffects, FoodCategory, FoodItem, NutritionFacts};
pub use patient::{PatientNote, PatientRecord, PatientReport, PatientSchema};
pub use preferences::{Allergy, DietaryPreferences, DietaryType};

// ABOUTME: Rules engine for dosha constitution scoring and diet plan generation
// ABOUTME: Pure, synchronous algorithms over the fixed question bank and static food library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

#![deny(unsafe_code)]

//! # Vitarva Intelligence
//!
//! Two cooperating components, both free of I/O and shared mutable state:
//!
//! - **assessment**: tallies questionnaire answers into a `ConstitutionScore`
//! - **`diet_plan`**: turns a score and dietary preferences into a `DietPlan`
//!
//! The food library is loaded once and only ever read, so a single instance
//! can back any number of concurrent generators.

/// Questionnaire, answer sets, and the constitution scorer
pub mod assessment;

/// Diet plan generator
pub mod diet_plan;

/// Static food reference table and restriction filters
pub mod food_library;

pub use assessment::{score_answers, score_complete, AnswerSet, DoshaProfile, QuestionBank};
pub use diet_plan::DietPlanGenerator;
pub use food_library::FoodLibrary;

// ABOUTME: Dosha constitution assessment: question bank, answers, scoring, profiles
// ABOUTME: Turns questionnaire answers into a validated three-axis ConstitutionScore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # Assessment
//!
//! The questionnaire is fixed at build time. Answers are collected into an
//! [`AnswerSet`] and scored by tallying the selected axis of each answer.
//!
//! ```text
//! use vitarva_intelligence::assessment::{score_answers, AnswerSet, QuestionBank};
//!
//! let bank = QuestionBank::standard();
//! let mut answers = AnswerSet::new();
//! answers.record(&bank, 1, Dosha::Vata)?;
//! let score = score_answers(&answers);
//! ```

/// Descriptive per-dosha profiles
pub mod profiles;
/// Question bank
pub mod questions;
/// Answer tally and percentage scoring
pub mod scorer;

pub use profiles::DoshaProfile;
pub use questions::{AnswerOption, Question, QuestionBank, QuestionCategory, QuestionId};
pub use scorer::{score_answers, score_complete, AnswerSet, Tally};

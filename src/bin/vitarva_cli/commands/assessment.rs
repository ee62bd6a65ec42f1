// ABOUTME: Questionnaire and scoring commands
// ABOUTME: Prints the standard question bank and scores an answers file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::json;
use vitarva_core::errors::{AppError, AppResult};
use vitarva_core::models::Dosha;
use vitarva_intelligence::assessment::QuestionId;
use vitarva_intelligence::{score_answers, score_complete, AnswerSet, DoshaProfile, QuestionBank};

use super::print_json;

/// Print every question with its three options
pub fn questions() -> AppResult<()> {
    print_json(&QuestionBank::standard())
}

/// Score the answers stored in `path`
pub fn score(path: &Path, strict: bool) -> AppResult<()> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    let pairs: BTreeMap<QuestionId, Dosha> = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_format(format!(
            "{} must map question ids to vata, pitta or kapha: {e}",
            path.display()
        ))
        .with_source(e)
    })?;

    let bank = QuestionBank::standard();
    let answers = AnswerSet::from_pairs(&bank, pairs)?;
    let score = if strict {
        score_complete(&bank, &answers)?
    } else {
        score_answers(&answers)
    };
    let dominant = score.dominant();

    print_json(&json!({
        "score": score,
        "dominant": dominant,
        "answered": answers.len(),
        "missing": answers.missing(&bank),
        "profile": DoshaProfile::of(dominant),
    }))
}

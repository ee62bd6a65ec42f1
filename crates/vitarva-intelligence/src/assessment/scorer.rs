// ABOUTME: Constitution scorer turning questionnaire answers into dosha percentages
// ABOUTME: AnswerSet, score_answers (lenient), and score_complete (strict)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use vitarva_core::errors::{AppError, AppResult};
use vitarva_core::models::{ConstitutionScore, Dosha};

use super::questions::{QuestionBank, QuestionId};

/// Selected axis per answered question.
///
/// Only built through [`AnswerSet::record`] or [`AnswerSet::from_pairs`], so
/// every id is checked against a question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Dosha>,
}

impl AnswerSet {
    /// Empty answer set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(question, answer)` pairs, checking each id against `bank`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an id not in `bank`
    pub fn from_pairs(
        bank: &QuestionBank,
        pairs: impl IntoIterator<Item = (QuestionId, Dosha)>,
    ) -> AppResult<Self> {
        let mut set = Self::new();
        for (id, dosha) in pairs {
            set.record(bank, id, dosha)?;
        }
        Ok(set)
    }

    /// Record or replace the answer to one question
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an id not in `bank`
    pub fn record(&mut self, bank: &QuestionBank, id: QuestionId, dosha: Dosha) -> AppResult<()> {
        if !bank.contains(id) {
            return Err(AppError::invalid_input(format!(
                "Question {id} is not part of the assessment"
            )));
        }
        self.answers.insert(id, dosha);
        Ok(())
    }

    /// Answer to one question
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<Dosha> {
        self.answers.get(&id).copied()
    }

    /// Answers in question-id order
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Dosha)> + '_ {
        self.answers.iter().map(|(id, dosha)| (*id, *dosha))
    }

    /// Number of answered questions
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether nothing has been answered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Unanswered question ids in bank order
    #[must_use]
    pub fn missing(&self, bank: &QuestionBank) -> Vec<QuestionId> {
        bank.questions()
            .iter()
            .map(|q| q.id)
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    /// Whether every question in `bank` is answered
    #[must_use]
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        self.missing(bank).is_empty()
    }

    /// Per-axis answer counts
    #[must_use]
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for dosha in self.answers.values() {
            match dosha {
                Dosha::Vata => tally.vata += 1,
                Dosha::Pitta => tally.pitta += 1,
                Dosha::Kapha => tally.kapha += 1,
            }
        }
        tally
    }
}

/// Raw answer counts per axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Answers selecting vata
    pub vata: u32,
    /// Answers selecting pitta
    pub pitta: u32,
    /// Answers selecting kapha
    pub kapha: u32,
}

impl Tally {
    /// Sum of all counts
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }
}

/// Score an answer set.
///
/// Unanswered questions contribute to no axis. An empty set yields the
/// 33/33/34 fallback.
#[must_use]
pub fn score_answers(answers: &AnswerSet) -> ConstitutionScore {
    let tally = answers.tally();
    if tally.total() == 0 {
        debug!("No answers recorded, using fallback constitution split");
        return ConstitutionScore::fallback();
    }

    let score = ConstitutionScore::from_counts(tally.vata, tally.pitta, tally.kapha);
    debug!(
        vata = tally.vata,
        pitta = tally.pitta,
        kapha = tally.kapha,
        answered = answers.len(),
        dominant = %score.dominant(),
        "Scored constitution"
    );
    score
}

/// Score an answer set that must cover every question in `bank`
///
/// # Errors
///
/// Returns `INVALID_INPUT` listing the missing question ids
pub fn score_complete(bank: &QuestionBank, answers: &AnswerSet) -> AppResult<ConstitutionScore> {
    let missing = answers.missing(bank);
    if !missing.is_empty() {
        debug!(?missing, "Strict scoring refused incomplete answers");
        return Err(AppError::invalid_input(format!(
            "{} of {} questions unanswered",
            missing.len(),
            bank.len()
        ))
        .with_details(serde_json::json!({ "missing": missing })));
    }
    Ok(score_answers(answers))
}

// ABOUTME: Integration tests for the constitution scorer
// ABOUTME: Covers tallying, rounding tolerance, fallback split, tie-breaks, and strict completeness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeMap;

use common::answers;
use rand::Rng;
use vitarva_core::errors::ErrorCode;
use vitarva_core::models::{ConstitutionScore, Dosha};
use vitarva_intelligence::assessment::{
    score_answers, score_complete, AnswerSet, DoshaProfile, QuestionBank, QuestionId,
};

#[test]
fn test_ten_three_two_split() {
    let score = score_answers(&answers(10, 3, 2));

    assert_eq!(score.vata(), 67);
    assert_eq!(score.pitta(), 20);
    assert_eq!(score.kapha(), 13);
    assert_eq!(score.dominant(), Dosha::Vata);
}

#[test]
fn test_empty_answer_set_falls_back() {
    let score = score_answers(&AnswerSet::new());
    assert_eq!(score, ConstitutionScore::fallback());
    assert_eq!((score.vata(), score.pitta(), score.kapha()), (33, 33, 34));
}

#[test]
fn test_single_axis_scores_hundred() {
    let score = score_answers(&answers(0, 15, 0));
    assert_eq!(score.pitta(), 100);
    assert_eq!(score.vata(), 0);
    assert_eq!(score.kapha(), 0);
    assert_eq!(score.dominant(), Dosha::Pitta);
}

#[test]
fn test_scoring_is_idempotent() {
    let set = answers(4, 6, 5);
    assert_eq!(score_answers(&set), score_answers(&set));
}

#[test]
fn test_totals_stay_within_rounding_tolerance() {
    let bank = QuestionBank::standard();
    let mut rng = common::seeded_rng(11);

    for _ in 0..200 {
        let mut set = AnswerSet::new();
        for question in bank.questions() {
            if rng.gen_bool(0.85) {
                let dosha = Dosha::ALL[rng.gen_range(0..3)];
                set.record(&bank, question.id, dosha).unwrap();
            }
        }
        let total = score_answers(&set).total();
        assert!((99..=101).contains(&total), "total {total} out of tolerance");
    }
}

#[test]
fn test_three_way_tie_resolves_to_vata() {
    let score = score_answers(&answers(5, 5, 5));
    assert_eq!((score.vata(), score.pitta(), score.kapha()), (33, 33, 33));
    assert_eq!(score.dominant(), Dosha::Vata);
}

#[test]
fn test_pitta_kapha_tie_resolves_to_pitta() {
    let score = score_answers(&answers(1, 7, 7));
    assert_eq!(score.dominant(), Dosha::Pitta);
}

#[test]
fn test_missing_answers_do_not_contribute() {
    let partial = answers(2, 1, 1);
    assert!(!partial.is_complete(&QuestionBank::standard()));

    let score = score_answers(&partial);
    assert_eq!((score.vata(), score.pitta(), score.kapha()), (50, 25, 25));
}

#[test]
fn test_strict_scoring_lists_missing_questions() {
    let bank = QuestionBank::standard();
    let err = score_complete(&bank, &answers(10, 3, 0)).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.details["missing"], serde_json::json!([14, 15]));

    assert!(score_complete(&bank, &answers(10, 3, 2)).is_ok());
}

#[test]
fn test_unknown_question_rejected() {
    let bank = QuestionBank::standard();
    let mut set = AnswerSet::new();
    let err = set.record(&bank, 99, Dosha::Kapha).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(set.is_empty());
}

#[test]
fn test_decoded_answers_checked_against_bank() {
    let bank = QuestionBank::standard();
    let raw: BTreeMap<QuestionId, Dosha> =
        serde_json::from_str(r#"{"900":"kapha","901":"kapha","1":"vata"}"#).unwrap();

    let err = AnswerSet::from_pairs(&bank, raw).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("900"));
}

#[test]
fn test_reanswering_replaces() {
    let bank = QuestionBank::standard();
    let mut set = AnswerSet::new();
    set.record(&bank, 3, Dosha::Vata).unwrap();
    set.record(&bank, 3, Dosha::Kapha).unwrap();

    assert_eq!(set.len(), 1);
    assert_eq!(set.get(3), Some(Dosha::Kapha));
}

#[test]
fn test_every_question_offers_each_axis() {
    for question in QuestionBank::standard().questions() {
        for dosha in Dosha::ALL {
            assert!(question.option_for(dosha).is_some(), "question {}", question.id);
        }
    }
}

#[test]
fn test_profiles_describe_elements() {
    assert_eq!(DoshaProfile::of(Dosha::Vata).element, "Air + Space");
    assert_eq!(DoshaProfile::of(Dosha::Pitta).element, "Fire + Water");
    assert_eq!(DoshaProfile::of(Dosha::Kapha).element, "Earth + Water");
    assert!(DoshaProfile::of(Dosha::Kapha).summary().starts_with("Kapha (Earth + Water)"));
}

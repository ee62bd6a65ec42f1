// ABOUTME: Shared fixtures for rules engine integration tests
// ABOUTME: Food item builders, seeded random sources, and answer set helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vitarva_core::models::{Dosha, DoshaEffects, FoodCategory, FoodItem, NutritionFacts};
use vitarva_intelligence::assessment::{AnswerSet, QuestionBank};

/// Deterministic random source
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Minimal food row with the given compatibility on every axis
pub fn food(id: u32, name: &str, category: FoodCategory, compatibility: f64) -> FoodItem {
    FoodItem {
        id,
        name: name.to_owned(),
        category,
        dosha_effects: DoshaEffects {
            vata: compatibility,
            pitta: compatibility,
            kapha: compatibility,
        },
        rasa: vec!["Sweet".to_owned()],
        virya: "Cooling".to_owned(),
        vipaka: "Sweet".to_owned(),
        gunas: Vec::new(),
        nutritional_values: NutritionFacts::default(),
        ayurvedic_benefits: format!("{name} is nourishing"),
        contraindications: Vec::new(),
        preparation_tips: format!("Cook {name} gently"),
    }
}

/// Answer the first `vata + pitta + kapha` questions of the standard bank in order
pub fn answers(vata: usize, pitta: usize, kapha: usize) -> AnswerSet {
    let bank = QuestionBank::standard();
    let picks = std::iter::repeat(Dosha::Vata)
        .take(vata)
        .chain(std::iter::repeat(Dosha::Pitta).take(pitta))
        .chain(std::iter::repeat(Dosha::Kapha).take(kapha));
    let ids = bank.questions().iter().map(|q| q.id);
    AnswerSet::from_pairs(&bank, ids.zip(picks)).unwrap()
}

// ABOUTME: Dietary guideline tables keyed by dominant dosha
// ABOUTME: Per-dosha guidelines, key recommendations, and general eating guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use vitarva_core::constants::guidelines::KEY_RECOMMENDATION_COUNT;
use vitarva_core::models::Dosha;

const VATA_GUIDELINES: &[&str] = &[
    "Favor warm, moist, and grounding foods",
    "Eat at regular times and never skip meals",
    "Use healthy oils and ghee generously in cooking",
    "Prefer sweet, sour, and salty tastes",
    "Avoid cold, dry, and raw foods",
    "Sip warm water or herbal tea through the day",
    "Keep meals calm and unhurried",
];

const PITTA_GUIDELINES: &[&str] = &[
    "Favor cool, refreshing, and mildly spiced foods",
    "Never skip meals, especially lunch",
    "Prefer sweet, bitter, and astringent tastes",
    "Limit hot spices, sour foods, salt, and fried foods",
    "Include fresh fruits and leafy vegetables daily",
    "Avoid alcohol, coffee, and fermented foods",
    "Eat in a peaceful setting, not while working",
];

const KAPHA_GUIDELINES: &[&str] = &[
    "Favor light, warm, and dry foods",
    "Make lunch the main meal and keep breakfast and dinner light",
    "Prefer pungent, bitter, and astringent tastes",
    "Use warming spices generously",
    "Limit heavy, oily, and sweet foods and dairy",
    "Avoid snacking between meals",
    "Take a brisk walk after meals",
];

/// Eating habits recommended for every constitution
pub const GENERAL_GUIDELINES: &[&str] = &[
    "Eat in a calm, peaceful environment without distractions",
    "Chew food thoroughly and eat mindfully",
    "Maintain regular meal timings daily",
    "Eat only when genuinely hungry",
    "Avoid drinking cold water with meals",
    "Use fresh, seasonal ingredients when possible",
    "Rest briefly after meals before activity",
];

/// Full guideline list for a dominant dosha
#[must_use]
pub const fn guidelines_for(dosha: Dosha) -> &'static [&'static str] {
    match dosha {
        Dosha::Vata => VATA_GUIDELINES,
        Dosha::Pitta => PITTA_GUIDELINES,
        Dosha::Kapha => KAPHA_GUIDELINES,
    }
}

/// Leading guidelines highlighted as key recommendations
#[must_use]
pub fn key_recommendations(dosha: Dosha) -> &'static [&'static str] {
    let all = guidelines_for(dosha);
    &all[..all.len().min(KEY_RECOMMENDATION_COUNT)]
}

// ABOUTME: Preparation and benefit text for each meal slot
// ABOUTME: Combines slot-specific wording with the stored tips of the selected foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use vitarva_core::models::{Dosha, FoodItem, MealSlotKind};

/// Slot-specific preparation wording
const fn preparation_lead(kind: MealSlotKind) -> &'static str {
    match kind {
        MealSlotKind::Morning => {
            "Start with warm water and fresh ginger on an empty stomach to kindle digestive fire. Cook breakfast with ghee and warming spices."
        }
        MealSlotKind::Afternoon => {
            "Eat largest meal at midday when digestive fire is strongest. Sit down and eat without distraction."
        }
        MealSlotKind::Evening => {
            "Keep dinner light and finish 3 hours before bedtime. Prefer soups and well-cooked vegetables."
        }
    }
}

/// Slot-specific benefit wording
fn benefit_lead(kind: MealSlotKind, dosha: Dosha) -> String {
    match kind {
        MealSlotKind::Morning => {
            format!("A warm breakfast awakens agni gently and steadies {dosha} for the day.")
        }
        MealSlotKind::Afternoon => format!(
            "Midday is when pitta time peaks, so the main meal is digested fully and nourishes {dosha} best."
        ),
        MealSlotKind::Evening => format!(
            "A light early dinner lets digestion finish before sleep and keeps {dosha} from accumulating overnight."
        ),
    }
}

/// Preparation text for a slot
///
/// Appends the stored preparation tip of the main grain and protein when the
/// slot drew them from the table.
#[must_use]
pub fn preparation(kind: MealSlotKind, grain: Option<&FoodItem>, protein: Option<&FoodItem>) -> String {
    let mut text = preparation_lead(kind).to_owned();
    for item in [grain, protein].into_iter().flatten() {
        let tip = item.preparation_tips.trim();
        if !tip.is_empty() {
            text.push_str(&format!(" {}: {}.", item.name, tip.trim_end_matches('.')));
        }
    }
    text
}

/// Ayurvedic benefit text for a slot
#[must_use]
pub fn ayurvedic_benefit(
    kind: MealSlotKind,
    dosha: Dosha,
    grain: Option<&FoodItem>,
    protein: Option<&FoodItem>,
) -> String {
    let mut text = benefit_lead(kind, dosha);
    for item in [grain, protein].into_iter().flatten() {
        let benefit = item.ayurvedic_benefits.trim();
        if !benefit.is_empty() {
            text.push_str(&format!(" {}: {}.", item.name, benefit.trim_end_matches('.')));
        }
    }
    text
}

// ABOUTME: Daily calorie and macronutrient estimate keyed by dominant dosha
// ABOUTME: Baseline calories with a fixed window, macros as percent-of-calories over kcal per gram
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use vitarva_core::constants::nutrition::{
    CALORIE_WINDOW_KCAL, CARBS_KCAL_PER_G, CARBS_PERCENT, FAT_KCAL_PER_G, FAT_PERCENT,
    KAPHA_BASELINE_KCAL, PITTA_BASELINE_KCAL, PROTEIN_KCAL_PER_G, PROTEIN_PERCENT,
    VATA_BASELINE_KCAL,
};
use vitarva_core::models::{Dosha, MacroRange, NutritionSummary};

/// Baseline daily calories for a dominant dosha
///
/// Pitta's strong agni gets the most, kapha's slow metabolism the least.
#[must_use]
pub const fn baseline_calories(dosha: Dosha) -> u32 {
    match dosha {
        Dosha::Vata => VATA_BASELINE_KCAL,
        Dosha::Pitta => PITTA_BASELINE_KCAL,
        Dosha::Kapha => KAPHA_BASELINE_KCAL,
    }
}

/// Grams of a macronutrient supplying `percent` of `kcal`
fn grams(kcal: u32, percent: f64, kcal_per_gram: f64) -> u32 {
    let g = (f64::from(kcal) * percent / 100.0) / kcal_per_gram;
    g.round().max(0.0) as u32
}

fn macro_range(calories: MacroRange, band: (f64, f64), kcal_per_gram: f64) -> MacroRange {
    MacroRange::new(
        grams(calories.min, band.0, kcal_per_gram),
        grams(calories.max, band.1, kcal_per_gram),
    )
}

/// Daily nutrition estimate for a dominant dosha
#[must_use]
pub fn summarize(dosha: Dosha) -> NutritionSummary {
    let baseline = baseline_calories(dosha);
    let calories = MacroRange::new(
        baseline.saturating_sub(CALORIE_WINDOW_KCAL),
        baseline + CALORIE_WINDOW_KCAL,
    );

    NutritionSummary {
        calories,
        protein_g: macro_range(calories, PROTEIN_PERCENT, PROTEIN_KCAL_PER_G),
        carbs_g: macro_range(calories, CARBS_PERCENT, CARBS_KCAL_PER_G),
        fat_g: macro_range(calories, FAT_PERCENT, FAT_KCAL_PER_G),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vata_summary() {
        let summary = summarize(Dosha::Vata);
        assert_eq!(summary.calories, MacroRange::new(1800, 2200));
        // 1800 * 12% / 4 = 54, 2200 * 15% / 4 = 82.5
        assert_eq!(summary.protein_g, MacroRange::new(54, 83));
        // 1800 * 50% / 4 = 225, 2200 * 55% / 4 = 302.5
        assert_eq!(summary.carbs_g, MacroRange::new(225, 303));
        // 1800 * 25% / 9 = 50, 2200 * 30% / 9 = 73.3
        assert_eq!(summary.fat_g, MacroRange::new(50, 73));
    }

    #[test]
    fn test_kapha_gets_lowest_baseline() {
        assert!(baseline_calories(Dosha::Kapha) < baseline_calories(Dosha::Vata));
        assert!(baseline_calories(Dosha::Vata) < baseline_calories(Dosha::Pitta));
    }
}

// ABOUTME: Integration tests for the diet plan generator
// ABOUTME: Filtering, threshold, placeholder, guideline, nutrition, and seeded determinism properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{food, seeded_rng};
use vitarva_core::constants::placeholders;
use vitarva_core::errors::ErrorCode;
use vitarva_core::models::{
    Allergy, ConstitutionScore, DietPlan, DietaryPreferences, DietaryType, Dosha, FoodCategory,
    MealSlotKind,
};
use vitarva_intelligence::diet_plan::guidelines::{guidelines_for, GENERAL_GUIDELINES};
use vitarva_intelligence::{DietPlanGenerator, FoodLibrary};

fn embedded() -> FoodLibrary {
    FoodLibrary::embedded().unwrap()
}

fn score(vata: u8, pitta: u8, kapha: u8) -> ConstitutionScore {
    ConstitutionScore::new(vata, pitta, kapha).unwrap()
}

fn plans(library: &FoodLibrary, score: ConstitutionScore, prefs: &DietaryPreferences) -> Vec<DietPlan> {
    let generator = DietPlanGenerator::new(library);
    (0..50)
        .map(|seed| generator.generate(score, prefs, &mut seeded_rng(seed)))
        .collect()
}

fn item_named<'a>(library: &'a FoodLibrary, name: &str) -> Option<&'a vitarva_core::models::FoodItem> {
    library.all().iter().find(|f| f.name == name)
}

#[test]
fn test_every_slot_field_is_non_empty() {
    let library = embedded();
    for dosha_score in [score(60, 25, 15), score(20, 60, 20), score(10, 20, 70)] {
        for plan in plans(&library, dosha_score, &DietaryPreferences::new()) {
            for slot in plan.slots() {
                assert!(!slot.main_grain.is_empty());
                assert!(!slot.protein.is_empty());
                assert!((1..=2).contains(&slot.vegetables.len()));
                assert!((2..=3).contains(&slot.spices.len()));
                assert!(slot.selections().all(|s| !s.trim().is_empty()));
                assert!(!slot.preparation.is_empty());
                assert!(!slot.ayurvedic_benefit.is_empty());
            }
        }
    }
}

#[test]
fn test_selected_foods_meet_threshold() {
    let library = embedded();
    for (dosha_score, dosha) in [
        (score(60, 25, 15), Dosha::Vata),
        (score(20, 60, 20), Dosha::Pitta),
        (score(10, 20, 70), Dosha::Kapha),
    ] {
        for plan in plans(&library, dosha_score, &DietaryPreferences::new()) {
            assert_eq!(plan.dominant_dosha, dosha);
            for slot in plan.slots() {
                for name in slot.selections() {
                    if let Some(item) = item_named(&library, name) {
                        assert!(
                            item.compatibility(dosha) >= 0.7,
                            "{name} selected for {dosha} with {}",
                            item.compatibility(dosha)
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_dairy_allergy_excludes_dairy_items() {
    let library = embedded();
    let prefs = DietaryPreferences::new().with_allergy(Allergy::Dairy);

    for plan in plans(&library, score(70, 20, 10), &prefs) {
        for slot in plan.slots() {
            for name in slot.selections() {
                if let Some(item) = item_named(&library, name) {
                    assert_ne!(item.category, FoodCategory::Dairy, "{name} is dairy");
                }
            }
        }
    }
}

#[test]
fn test_vegan_and_onion_garlic_restrictions() {
    let library = embedded();
    let prefs = DietaryPreferences::new()
        .with_dietary_type(DietaryType::Vegan)
        .with_dietary_type(DietaryType::NoOnionGarlic);

    for plan in plans(&library, score(15, 15, 70), &prefs) {
        for slot in plan.slots() {
            for name in slot.selections() {
                assert_ne!(name, "Onion");
                assert_ne!(name, "Garlic");
                if let Some(item) = item_named(&library, name) {
                    assert_ne!(item.category, FoodCategory::Dairy);
                }
            }
        }
    }
}

#[test]
fn test_gluten_allergy_excludes_wheat() {
    let library = embedded();
    let prefs = DietaryPreferences::new().with_allergy(Allergy::Gluten);
    for plan in plans(&library, score(70, 20, 10), &prefs) {
        assert!(plan.slots().iter().all(|s| s.main_grain != "Wheat"));
    }
}

#[test]
fn test_dislikes_match_case_insensitive_substrings() {
    let library = embedded();
    let prefs = DietaryPreferences::new()
        .with_dislike("RICE")
        .with_dislike("ginger");

    for plan in plans(&library, score(70, 20, 10), &prefs) {
        for slot in plan.slots() {
            for name in slot.selections() {
                let lower = name.to_lowercase();
                assert!(!lower.contains("rice"), "{name} is disliked");
                assert!(!lower.contains("ginger"), "{name} is disliked");
            }
        }
    }
}

#[test]
fn test_protein_falls_back_when_allergies_empty_partition() {
    let library = FoodLibrary::from_items(vec![
        food(1, "Basmati Rice", FoodCategory::Grains, 0.9),
        food(2, "Paneer", FoodCategory::Dairy, 0.9),
        food(3, "Almonds", FoodCategory::Nuts, 0.9),
        food(4, "Carrot", FoodCategory::Vegetables, 0.9),
    ])
    .unwrap();
    let prefs = DietaryPreferences::new()
        .with_allergy(Allergy::Dairy)
        .with_allergy(Allergy::Nuts);

    let plan = DietPlanGenerator::new(&library).generate(score(60, 20, 20), &prefs, &mut seeded_rng(3));

    for slot in plan.slots() {
        assert_eq!(slot.protein, placeholders::PROTEIN);
        assert_eq!(slot.main_grain, "Basmati Rice");
    }
}

#[test]
fn test_dairy_and_nuts_serve_as_protein_without_allergies() {
    let library = FoodLibrary::from_items(vec![
        food(2, "Paneer", FoodCategory::Dairy, 0.9),
        food(3, "Almonds", FoodCategory::Nuts, 0.9),
    ])
    .unwrap();

    let plan = DietPlanGenerator::new(&library).generate(
        score(60, 20, 20),
        &DietaryPreferences::new(),
        &mut seeded_rng(5),
    );
    assert!(["Paneer", "Almonds"].contains(&plan.morning.protein.as_str()));
}

#[test]
fn test_empty_library_yields_complete_placeholder_plan() {
    let library = FoodLibrary::from_items(Vec::new()).unwrap();
    let plan = DietPlanGenerator::new(&library).generate(
        score(20, 20, 60),
        &DietaryPreferences::new(),
        &mut seeded_rng(1),
    );

    for slot in plan.slots() {
        assert_eq!(slot.main_grain, placeholders::GRAIN);
        assert_eq!(slot.protein, placeholders::PROTEIN);
        assert_eq!(slot.vegetables, vec![placeholders::VEGETABLES.to_owned()]);
        assert!(slot.spices.len() >= 2, "recommended spices top up the slot");
        assert!(slot.fruit.is_none());
    }
}

#[test]
fn test_low_compatibility_foods_never_selected() {
    let library = FoodLibrary::from_items(vec![
        food(1, "Millet", FoodCategory::Grains, 0.69),
        food(2, "Quinoa", FoodCategory::Grains, 0.7),
    ])
    .unwrap();

    for seed in 0..20 {
        let plan = DietPlanGenerator::new(&library).generate(
            score(34, 33, 33),
            &DietaryPreferences::new(),
            &mut seeded_rng(seed),
        );
        assert!(plan.slots().iter().all(|s| s.main_grain == "Quinoa"));
    }
}

#[test]
fn test_guidelines_match_dominant_dosha_table() {
    let library = embedded();
    let generator = DietPlanGenerator::new(&library);

    for (dosha_score, dosha) in [
        (score(50, 30, 20), Dosha::Vata),
        (score(30, 50, 20), Dosha::Pitta),
        (score(20, 30, 50), Dosha::Kapha),
    ] {
        let plan = generator.generate(dosha_score, &DietaryPreferences::new(), &mut seeded_rng(9));
        let expected: Vec<String> = guidelines_for(dosha).iter().map(|s| (*s).to_owned()).collect();

        assert_eq!(plan.guidelines, expected);
        assert_eq!(plan.key_recommendations, expected[..4].to_vec());
        assert_eq!(plan.general_guidelines, GENERAL_GUIDELINES);
    }
}

#[test]
fn test_general_guidelines_on_placeholder_plan() {
    let empty = FoodLibrary::from_items(Vec::new()).unwrap();
    let plan = DietPlanGenerator::new(&empty).generate(
        score(20, 30, 50),
        &DietaryPreferences::new(),
        &mut seeded_rng(1),
    );

    assert_eq!(plan.general_guidelines.len(), GENERAL_GUIDELINES.len());
    assert!(plan
        .general_guidelines
        .iter()
        .any(|g| g.contains("Chew food thoroughly")));
}

#[test]
fn test_nutrition_follows_dominant_baseline() {
    let library = embedded();
    let generator = DietPlanGenerator::new(&library);

    let kapha = generator.generate(score(20, 20, 60), &DietaryPreferences::new(), &mut seeded_rng(1));
    let pitta = generator.generate(score(20, 60, 20), &DietaryPreferences::new(), &mut seeded_rng(1));

    assert_eq!(kapha.nutrition.calories.min, 1600);
    assert_eq!(kapha.nutrition.calories.max, 2000);
    assert_eq!(pitta.nutrition.calories.min, 2000);
    assert_eq!(pitta.nutrition.calories.max, 2400);
}

#[test]
fn test_same_seed_same_selections() {
    let library = embedded();
    let generator = DietPlanGenerator::new(&library);
    let prefs = DietaryPreferences::new().with_allergy(Allergy::Nuts);

    let a = generator.generate(score(45, 35, 20), &prefs, &mut seeded_rng(42));
    let b = generator.generate(score(45, 35, 20), &prefs, &mut seeded_rng(42));

    assert_eq!(a.morning, b.morning);
    assert_eq!(a.afternoon, b.afternoon);
    assert_eq!(a.evening, b.evening);
}

#[test]
fn test_slots_carry_windows_and_narratives() {
    let library = embedded();
    let plan = DietPlanGenerator::new(&library).generate(
        score(60, 25, 15),
        &DietaryPreferences::new().with_special_requirements("Diabetic, low sugar"),
        &mut seeded_rng(2),
    );

    assert_eq!(plan.morning.kind, MealSlotKind::Morning);
    assert_eq!(plan.morning.window, "6:00 AM - 10:00 AM");
    assert!(plan.morning.preparation.contains("kindle digestive fire"));
    assert!(plan.afternoon.preparation.contains("largest meal at midday"));
    assert!(plan.evening.preparation.contains("3 hours before bedtime"));
    assert!(plan.afternoon.fruit.is_none());
    assert_eq!(plan.special_requirements.as_deref(), Some("Diabetic, low sugar"));
    assert!(plan.constitution.starts_with("Vata"));
}

#[test]
fn test_invalid_percentages_rejected_at_boundary() {
    let library = embedded();
    let err = DietPlanGenerator::new(&library)
        .generate_for_percentages((90, 90, 90), &DietaryPreferences::new(), &mut seeded_rng(1))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

// ABOUTME: Diet plan command
// ABOUTME: Builds preferences from flags, picks the food table and random source, prints the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use vitarva::config::AppConfig;
use vitarva_core::errors::AppResult;
use vitarva_core::models::{Allergy, DietaryPreferences, DietaryType};
use vitarva_intelligence::{DietPlanGenerator, FoodLibrary};

use super::print_json;

/// Flags accepted by `vitarva-cli plan`
pub struct PlanArgs {
    pub percentages: (u8, u8, u8),
    pub allergies: Vec<Allergy>,
    pub diet_types: Vec<DietaryType>,
    pub dislikes: Vec<String>,
    pub special: Option<String>,
    pub seed: Option<u64>,
    pub food_library: Option<PathBuf>,
}

impl PlanArgs {
    fn preferences(&self) -> DietaryPreferences {
        let mut prefs = DietaryPreferences::new();
        for &allergy in &self.allergies {
            prefs = prefs.with_allergy(allergy);
        }
        for &dietary_type in &self.diet_types {
            prefs = prefs.with_dietary_type(dietary_type);
        }
        for dislike in &self.dislikes {
            prefs = prefs.with_dislike(dislike.as_str());
        }
        if let Some(note) = &self.special {
            prefs = prefs.with_special_requirements(note.as_str());
        }
        prefs
    }
}

/// Generate and print one plan
pub fn generate(config: &AppConfig, args: &PlanArgs) -> AppResult<()> {
    let library = match args
        .food_library
        .as_ref()
        .or(config.storage.food_library.as_ref())
    {
        Some(path) => FoodLibrary::from_path(path)?,
        None => FoodLibrary::embedded()?,
    };
    debug!(foods = library.len(), "Food library loaded");

    let prefs = args.preferences();
    let generator = DietPlanGenerator::new(&library);
    let plan = match args.seed {
        Some(seed) => generator.generate_for_percentages(
            args.percentages,
            &prefs,
            &mut ChaCha8Rng::seed_from_u64(seed),
        )?,
        None => {
            generator.generate_for_percentages(args.percentages, &prefs, &mut rand::thread_rng())?
        }
    };
    print_json(&plan)
}

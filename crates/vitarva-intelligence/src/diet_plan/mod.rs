// ABOUTME: Diet plan generator composing a three-meal day from the food library
// ABOUTME: Dominant dosha, threshold and restriction filters, constrained random selection, narratives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # Diet Plan Generator
//!
//! Given a [`ConstitutionScore`] and [`DietaryPreferences`], composes a
//! [`DietPlan`] from a [`FoodLibrary`]:
//!
//! 1. Determine the dominant dosha (ties: Vata > Pitta > Kapha)
//! 2. Keep foods with compatibility >= 0.7 for that dosha
//! 3. Apply allergy, diet-type, and dislike filters
//! 4. Partition by category and draw per meal slot
//! 5. Fill empty partitions with placeholders instead of failing
//!
//! The random source is injected so callers can pin selections:
//!
//! ```text
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let plan = DietPlanGenerator::new(&library).generate(score, &prefs, &mut rng);
//! ```

/// Per-dosha guideline tables
pub mod guidelines;
/// Slot narrative text
pub mod narrative;
/// Daily calorie and macro estimate
pub mod nutrition;
/// Partitioning and random draws
pub mod selection;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};
use vitarva_core::constants::placeholders;
use vitarva_core::constants::selection::{
    COMPATIBILITY_THRESHOLD, SPICES_PER_MEAL, VEGETABLES_PER_MEAL,
};
use vitarva_core::errors::AppResult;
use vitarva_core::models::{
    ConstitutionScore, DietPlan, DietaryPreferences, Dosha, FoodItem, MealSlot, MealSlotKind,
};

use crate::assessment::DoshaProfile;
use crate::food_library::{allowed_by, filter_by_preferences, recommended_spices, FoodLibrary};
use selection::Partitions;

/// Composes diet plans from a borrowed food library
#[derive(Debug, Clone, Copy)]
pub struct DietPlanGenerator<'a> {
    library: &'a FoodLibrary,
}

impl<'a> DietPlanGenerator<'a> {
    /// Generator over `library`
    #[must_use]
    pub const fn new(library: &'a FoodLibrary) -> Self {
        Self { library }
    }

    /// Food library in use
    #[must_use]
    pub const fn library(&self) -> &'a FoodLibrary {
        self.library
    }

    /// Foods eligible for `dosha` after every restriction in `prefs`
    #[must_use]
    pub fn candidates(&self, dosha: Dosha, prefs: &DietaryPreferences) -> Vec<&'a FoodItem> {
        let compatible = self.library.for_dosha(dosha, COMPATIBILITY_THRESHOLD);
        let compatible_count = compatible.len();
        let filtered = filter_by_preferences(compatible, prefs);
        debug!(
            dosha = %dosha,
            compatible = compatible_count,
            after_preferences = filtered.len(),
            "Filtered food candidates"
        );
        filtered
    }

    /// Generate a one-day plan.
    ///
    /// Empty categories are filled with placeholders, so a structurally
    /// complete plan is produced even from an empty library.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        score: ConstitutionScore,
        prefs: &DietaryPreferences,
        rng: &mut R,
    ) -> DietPlan {
        let dosha = score.dominant();
        let candidates = self.candidates(dosha, prefs);
        let partitions = Partitions::from_filtered(&candidates);
        if partitions.is_empty() {
            info!(dosha = %dosha, "No foods survived filtering, plan uses placeholders throughout");
        }

        let spices = self.spice_fallbacks(dosha, prefs);
        let morning = compose_slot(MealSlotKind::Morning, dosha, &partitions, &spices, rng);
        let afternoon = compose_slot(MealSlotKind::Afternoon, dosha, &partitions, &spices, rng);
        let evening = compose_slot(MealSlotKind::Evening, dosha, &partitions, &spices, rng);

        let guidelines = guidelines::guidelines_for(dosha);
        let plan = DietPlan {
            dominant_dosha: dosha,
            score,
            constitution: DoshaProfile::of(dosha).summary(),
            morning,
            afternoon,
            evening,
            nutrition: nutrition::summarize(dosha),
            guidelines: to_strings(guidelines),
            key_recommendations: to_strings(guidelines::key_recommendations(dosha)),
            general_guidelines: to_strings(guidelines::GENERAL_GUIDELINES),
            special_requirements: prefs.special_requirements().map(str::to_owned),
            generated_at: Utc::now(),
        };

        info!(
            dosha = %dosha,
            score = %score,
            candidates = candidates.len(),
            "Generated diet plan"
        );
        plan
    }

    /// Generate from unvalidated percentages
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if the percentages do not form a valid
    /// [`ConstitutionScore`]
    pub fn generate_for_percentages<R: Rng + ?Sized>(
        &self,
        (vata, pitta, kapha): (u8, u8, u8),
        prefs: &DietaryPreferences,
        rng: &mut R,
    ) -> AppResult<DietPlan> {
        let score = ConstitutionScore::new(vata, pitta, kapha)?;
        Ok(self.generate(score, prefs, rng))
    }

    /// Generate using the thread-local random source
    #[must_use]
    pub fn generate_with_thread_rng(
        &self,
        score: ConstitutionScore,
        prefs: &DietaryPreferences,
    ) -> DietPlan {
        self.generate(score, prefs, &mut rand::thread_rng())
    }

    /// Recommended spice names usable to top up a slot.
    ///
    /// A name that exists in the library must itself be an eligible
    /// candidate; other names only have to avoid the dislikes.
    fn spice_fallbacks(&self, dosha: Dosha, prefs: &DietaryPreferences) -> Vec<&'static str> {
        let dislikes = prefs.normalized_dislikes();
        recommended_spices(dosha)
            .iter()
            .copied()
            .filter(|name| {
                match self
                    .library
                    .all()
                    .iter()
                    .find(|f| f.name.eq_ignore_ascii_case(name))
                {
                    Some(item) => {
                        item.compatibility(dosha) >= COMPATIBILITY_THRESHOLD
                            && allowed_by(item, prefs, &dislikes)
                    }
                    None => {
                        let lower = name.to_lowercase();
                        !dislikes.iter().any(|d| lower.contains(d.as_str()))
                    }
                }
            })
            .collect()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn compose_slot<R: Rng + ?Sized>(
    kind: MealSlotKind,
    dosha: Dosha,
    partitions: &Partitions<'_>,
    spice_fallbacks: &[&'static str],
    rng: &mut R,
) -> MealSlot {
    let grain = selection::pick_one(&partitions.grains, rng);
    let protein = selection::pick_one(&partitions.proteins, rng);

    let vegetables = selection::pick_between(&partitions.vegetables, VEGETABLES_PER_MEAL, rng);
    let vegetables = if vegetables.is_empty() {
        vec![placeholders::VEGETABLES.to_owned()]
    } else {
        selection::names(&vegetables)
    };

    let spice_count = rng.gen_range(SPICES_PER_MEAL.0..=SPICES_PER_MEAL.1);
    let drawn_spices = selection::pick_n(&partitions.spices, spice_count, rng);
    let mut spices = selection::spice_names(&drawn_spices, spice_fallbacks, spice_count);
    if spices.is_empty() {
        spices.push(placeholders::SPICES.to_owned());
    }

    let fruit = match kind {
        MealSlotKind::Morning => selection::pick_one(&partitions.fruits, rng).map(|f| f.name.clone()),
        MealSlotKind::Afternoon | MealSlotKind::Evening => None,
    };

    MealSlot {
        kind,
        window: kind.window().to_owned(),
        main_grain: grain.map_or_else(|| placeholders::GRAIN.to_owned(), |g| g.name.clone()),
        protein: protein.map_or_else(|| placeholders::PROTEIN.to_owned(), |p| p.name.clone()),
        vegetables,
        spices,
        fruit,
        preparation: narrative::preparation(kind, grain, protein),
        ayurvedic_benefit: narrative::ayurvedic_benefit(kind, dosha, grain, protein),
    }
}

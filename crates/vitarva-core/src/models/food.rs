// ABOUTME: Food reference data models for the static Ayurvedic food table
// ABOUTME: FoodItem, FoodCategory, DoshaEffects, and NutritionFacts with load-time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::fmt;

use serde::{Deserialize, Serialize};

use super::dosha::Dosha;
use crate::errors::{AppError, AppResult};

/// Food category in the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Rice, millets, oats, wheat
    #[serde(alias = "Grains")]
    Grains,
    /// Dals, legumes, paneer-free protein sources
    #[serde(alias = "Proteins", alias = "Legumes")]
    Proteins,
    /// Cooked and raw vegetables
    #[serde(alias = "Vegetables")]
    Vegetables,
    /// Culinary spices and herbs
    #[serde(alias = "Spices", alias = "Spices & Herbs")]
    Spices,
    /// Fresh and dried fruit
    #[serde(alias = "Fruits")]
    Fruits,
    /// Milk, ghee, yogurt, paneer
    #[serde(alias = "Dairy", alias = "Dairy Products")]
    Dairy,
    /// Nuts and seeds
    #[serde(alias = "Nuts", alias = "Nuts & Seeds")]
    Nuts,
}

impl FoodCategory {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grains => "grains",
            Self::Proteins => "proteins",
            Self::Vegetables => "vegetables",
            Self::Spices => "spices",
            Self::Fruits => "fruits",
            Self::Dairy => "dairy",
            Self::Nuts => "nuts",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-axis dietary compatibility, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoshaEffects {
    /// Suitability for vata
    pub vata: f64,
    /// Suitability for pitta
    pub pitta: f64,
    /// Suitability for kapha
    pub kapha: f64,
}

impl DoshaEffects {
    /// Compatibility for one axis
    #[must_use]
    pub const fn for_dosha(&self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }
}

/// Nutrition facts per serving
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Dietary fibre (g)
    pub fiber: f64,
}

/// A row of the static food table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Stable identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Category used for meal composition
    pub category: FoodCategory,
    /// Per-axis compatibility
    pub dosha_effects: DoshaEffects,
    /// Tastes (informational)
    #[serde(default)]
    pub rasa: Vec<String>,
    /// Heating or cooling potency (informational)
    #[serde(default)]
    pub virya: String,
    /// Post-digestive effect (informational)
    #[serde(default)]
    pub vipaka: String,
    /// Qualities (informational)
    #[serde(default)]
    pub gunas: Vec<String>,
    /// Nutrition facts
    #[serde(default, alias = "nutrition")]
    pub nutritional_values: NutritionFacts,
    /// Free-text benefit note
    #[serde(default)]
    pub ayurvedic_benefits: String,
    /// Free-text contraindications
    #[serde(default)]
    pub contraindications: Vec<String>,
    /// Free-text preparation note
    #[serde(default)]
    pub preparation_tips: String,
}

impl FoodItem {
    /// Compatibility for one axis
    #[must_use]
    pub const fn compatibility(&self, dosha: Dosha) -> f64 {
        self.dosha_effects.for_dosha(dosha)
    }

    /// Check the row invariants
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` for an empty name, a compatibility outside
    /// [0, 1], or a negative or non-finite nutrition value
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_format(format!(
                "Food item {} has an empty name",
                self.id
            )));
        }

        for dosha in Dosha::ALL {
            let value = self.compatibility(dosha);
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AppError::invalid_format(format!(
                    "Food '{}' has {dosha} compatibility {value}, expected 0.0-1.0",
                    self.name
                )));
            }
        }

        let facts = &self.nutritional_values;
        for (label, value) in [
            ("calories", facts.calories),
            ("protein", facts.protein),
            ("carbs", facts.carbs),
            ("fiber", facts.fiber),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_format(format!(
                    "Food '{}' has invalid {label} value {value}",
                    self.name
                )));
            }
        }

        Ok(())
    }
}

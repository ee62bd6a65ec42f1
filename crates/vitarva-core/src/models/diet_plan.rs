// ABOUTME: Generated diet plan output models
// ABOUTME: MealSlotKind, MealSlot, MacroRange, NutritionSummary, and the DietPlan aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dosha::{ConstitutionScore, Dosha};

/// Daily meal window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlotKind {
    /// Breakfast window
    Morning,
    /// Midday main meal
    Afternoon,
    /// Light dinner
    Evening,
}

impl MealSlotKind {
    /// Slots in serving order
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Suggested time window for the slot
    #[must_use]
    pub const fn window(&self) -> &'static str {
        match self {
            Self::Morning => "6:00 AM - 10:00 AM",
            Self::Afternoon => "12:00 PM - 2:00 PM",
            Self::Evening => "6:00 PM - 8:00 PM",
        }
    }

    /// Slot title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Morning => "Breakfast",
            Self::Afternoon => "Lunch (Main Meal)",
            Self::Evening => "Dinner",
        }
    }
}

impl fmt::Display for MealSlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One composed meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    /// Which meal this is
    pub kind: MealSlotKind,
    /// Suggested time window
    pub window: String,
    /// Main grain, or a placeholder
    pub main_grain: String,
    /// Protein item, or a placeholder
    pub protein: String,
    /// One or two vegetables, or a single placeholder
    pub vegetables: Vec<String>,
    /// Two or three spices
    pub spices: Vec<String>,
    /// Optional fruit (morning only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fruit: Option<String>,
    /// Preparation instructions
    pub preparation: String,
    /// Ayurvedic benefit narrative
    pub ayurvedic_benefit: String,
}

impl MealSlot {
    /// Every selected name in the slot
    pub fn selections(&self) -> impl Iterator<Item = &str> {
        [self.main_grain.as_str(), self.protein.as_str()]
            .into_iter()
            .chain(self.vegetables.iter().map(String::as_str))
            .chain(self.spices.iter().map(String::as_str))
            .chain(self.fruit.as_deref())
    }
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
}

impl MacroRange {
    /// Create a range, ordering the bounds
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Whether `value` falls in the range
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for MacroRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Daily nutrition estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    /// Calories per day (kcal)
    pub calories: MacroRange,
    /// Protein per day (g)
    pub protein_g: MacroRange,
    /// Carbohydrates per day (g)
    pub carbs_g: MacroRange,
    /// Fat per day (g)
    pub fat_g: MacroRange,
}

/// A complete one-day plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Axis the plan was built for
    pub dominant_dosha: Dosha,
    /// Score the plan was built from
    pub score: ConstitutionScore,
    /// One-line description of the constitution
    pub constitution: String,
    /// Breakfast
    pub morning: MealSlot,
    /// Lunch
    pub afternoon: MealSlot,
    /// Dinner
    pub evening: MealSlot,
    /// Daily nutrition estimate
    pub nutrition: NutritionSummary,
    /// Full guideline list for the dominant axis
    pub guidelines: Vec<String>,
    /// Leading guidelines highlighted to the patient
    pub key_recommendations: Vec<String>,
    /// Eating habits shown on every plan regardless of constitution
    #[serde(default)]
    pub general_guidelines: Vec<String>,
    /// Free-text note copied from the preferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl DietPlan {
    /// The three slots in serving order
    #[must_use]
    pub const fn slots(&self) -> [&MealSlot; 3] {
        [&self.morning, &self.afternoon, &self.evening]
    }
}

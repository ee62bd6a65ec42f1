// ABOUTME: Read-only Ayurvedic food reference table with dosha and preference filters
// ABOUTME: FoodLibrary loading (embedded, file, JSON), category queries, and restriction filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # Food Library
//!
//! The food table is static reference data, loaded once and never mutated.
//! Two document shapes are accepted: the versioned form
//! `{ "schemaVersion": 1, "foods": [...] }` and a bare array of items.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};
use vitarva_core::constants::selection::{
    EGG_SOURCES, GLUTEN_SOURCES, ONION_GARLIC, SOY_SOURCES,
};
use vitarva_core::errors::{AppError, AppResult};
use vitarva_core::models::{Allergy, DietaryPreferences, DietaryType, Dosha, FoodCategory, FoodItem};

const EMBEDDED_LIBRARY: &str = include_str!("../data/food_library.json");

/// Newest food table document revision
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Deserialize)]
#[serde(untagged)]
enum LibraryDocument {
    Versioned {
        #[serde(rename = "schemaVersion")]
        schema_version: u32,
        foods: Vec<FoodItem>,
    },
    Legacy(Vec<FoodItem>),
}

/// Immutable food table
#[derive(Debug, Clone, PartialEq)]
pub struct FoodLibrary {
    foods: Vec<FoodItem>,
}

impl FoodLibrary {
    /// Build from already-parsed items
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` if any item fails validation or two items
    /// share an id
    pub fn from_items(foods: Vec<FoodItem>) -> AppResult<Self> {
        let mut ids = HashSet::with_capacity(foods.len());
        for food in &foods {
            food.validate()?;
            if !ids.insert(food.id) {
                return Err(AppError::invalid_format(format!(
                    "Duplicate food id {} ('{}')",
                    food.id, food.name
                )));
            }
        }
        Ok(Self { foods })
    }

    /// Parse a food table document
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` for malformed JSON, an unsupported schema
    /// version, or invalid items
    pub fn from_json(json: &str) -> AppResult<Self> {
        let document: LibraryDocument = serde_json::from_str(json).map_err(|e| {
            AppError::invalid_format(format!("Food library is not valid: {e}")).with_source(e)
        })?;

        let foods = match document {
            LibraryDocument::Versioned {
                schema_version,
                foods,
            } => {
                if schema_version != CURRENT_SCHEMA_VERSION {
                    return Err(AppError::invalid_format(format!(
                        "Unsupported food library schema version {schema_version}"
                    )));
                }
                foods
            }
            LibraryDocument::Legacy(foods) => {
                debug!("Loading unversioned food library document");
                foods
            }
        };

        Self::from_items(foods)
    }

    /// Read and parse a food table file
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read, otherwise as
    /// [`FoodLibrary::from_json`]
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!(
                "Failed to read food library {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;
        let library = Self::from_json(&json)?;
        info!(path = %path.display(), foods = library.len(), "Loaded food library");
        Ok(library)
    }

    /// The table bundled with the crate
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` if the bundled table is malformed
    pub fn embedded() -> AppResult<Self> {
        Self::from_json(EMBEDDED_LIBRARY)
    }

    /// Every item in table order
    #[must_use]
    pub fn all(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Items in one category
    pub fn by_category(&self, category: FoodCategory) -> impl Iterator<Item = &FoodItem> {
        self.foods.iter().filter(move |f| f.category == category)
    }

    /// Items whose compatibility for `dosha` is at least `threshold`
    #[must_use]
    pub fn for_dosha(&self, dosha: Dosha, threshold: f64) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|f| f.compatibility(dosha) >= threshold)
            .collect()
    }

    /// Case-insensitive search over names and benefit text
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&FoodItem> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.foods.iter().collect();
        }
        self.foods
            .iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&needle)
                    || f.ayurvedic_benefits.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

fn named_in(item: &FoodItem, names: &[&str]) -> bool {
    names.iter().any(|n| item.name.eq_ignore_ascii_case(n))
}

/// Whether `item` survives every restriction in `prefs`
#[must_use]
pub fn allowed_by(item: &FoodItem, prefs: &DietaryPreferences, dislikes: &[String]) -> bool {
    if prefs.has_allergy(Allergy::Dairy) && item.category == FoodCategory::Dairy {
        return false;
    }
    if prefs.has_allergy(Allergy::Nuts) && item.category == FoodCategory::Nuts {
        return false;
    }
    if prefs.has_allergy(Allergy::Gluten) && named_in(item, GLUTEN_SOURCES) {
        return false;
    }
    if prefs.has_allergy(Allergy::Soy) && named_in(item, SOY_SOURCES) {
        return false;
    }
    if prefs.has_allergy(Allergy::Eggs) && named_in(item, EGG_SOURCES) {
        return false;
    }
    if prefs.has_dietary_type(DietaryType::Vegan) && item.category == FoodCategory::Dairy {
        return false;
    }
    if prefs.excludes_onion_garlic() && named_in(item, ONION_GARLIC) {
        return false;
    }

    let name = item.name.to_lowercase();
    !dislikes.iter().any(|d| name.contains(d.as_str()))
}

/// Drop every item excluded by `prefs`.
///
/// Each restriction is a set intersection, so the result does not depend on
/// the order they are applied in.
#[must_use]
pub fn filter_by_preferences<'a>(
    items: impl IntoIterator<Item = &'a FoodItem>,
    prefs: &DietaryPreferences,
) -> Vec<&'a FoodItem> {
    let dislikes = prefs.normalized_dislikes();
    items
        .into_iter()
        .filter(|item| allowed_by(item, prefs, &dislikes))
        .collect()
}

/// Spices traditionally recommended for `dosha`
#[must_use]
pub const fn recommended_spices(dosha: Dosha) -> &'static [&'static str] {
    match dosha {
        Dosha::Vata => &["Ginger", "Cinnamon", "Cardamom", "Cumin"],
        Dosha::Pitta => &["Coriander", "Fennel", "Mint", "Cumin"],
        Dosha::Kapha => &["Black Pepper", "Ginger", "Turmeric", "Mustard Seeds"],
    }
}

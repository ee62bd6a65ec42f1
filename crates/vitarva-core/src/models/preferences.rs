// ABOUTME: Caller-supplied dietary preferences for diet plan generation
// ABOUTME: DietaryType and Allergy tags, normalised dislikes, and special requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Dietary type tag selected by the practitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DietaryType {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Jain diet, excludes onion and garlic among others
    Jain,
    /// Excludes onion and garlic
    #[serde(rename = "No Onion/Garlic", alias = "NoOnionGarlic", alias = "no-onion-garlic")]
    NoOnionGarlic,
}

impl DietaryType {
    /// Label as shown in the practitioner UI
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Jain => "Jain",
            Self::NoOnionGarlic => "No Onion/Garlic",
        }
    }

    /// Whether onion and garlic are excluded
    #[must_use]
    pub const fn excludes_onion_garlic(&self) -> bool {
        matches!(self, Self::Jain | Self::NoOnionGarlic)
    }
}

impl fmt::Display for DietaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DietaryType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "jain" => Ok(Self::Jain),
            k if k.starts_with("no") && k.contains("onion") && k.contains("garlic") => {
                Ok(Self::NoOnionGarlic)
            }
            _ => Err(AppError::invalid_input(format!("Unknown dietary type '{s}'"))),
        }
    }
}

/// Allergy tag selected by the practitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Allergy {
    /// Excludes the dairy category
    Dairy,
    /// Excludes the nuts category
    Nuts,
    /// Excludes foods named for gluten sources
    Gluten,
    /// Excludes foods named for soy sources
    Soy,
    /// Excludes foods named for egg sources
    Eggs,
}

impl Allergy {
    /// Label as shown in the practitioner UI
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Nuts => "Nuts",
            Self::Gluten => "Gluten",
            Self::Soy => "Soy",
            Self::Eggs => "Eggs",
        }
    }
}

impl fmt::Display for Allergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Allergy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dairy" => Ok(Self::Dairy),
            "nuts" | "nut" => Ok(Self::Nuts),
            "gluten" => Ok(Self::Gluten),
            "soy" => Ok(Self::Soy),
            "eggs" | "egg" => Ok(Self::Eggs),
            _ => Err(AppError::invalid_input(format!("Unknown allergy '{s}'"))),
        }
    }
}

/// Restrictions applied before food selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreferences {
    /// Dietary type tags
    #[serde(default, alias = "dietaryType")]
    pub dietary_types: Vec<DietaryType>,
    /// Allergy tags
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    /// Free-text dislikes, matched as case-insensitive substrings of food names
    #[serde(default)]
    pub dislikes: Vec<String>,
    /// Free-text note carried through to the plan
    #[serde(default)]
    pub special_requirements: Option<String>,
}

impl DietaryPreferences {
    /// Empty preferences
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dietary type
    #[must_use]
    pub fn with_dietary_type(mut self, dietary_type: DietaryType) -> Self {
        if !self.dietary_types.contains(&dietary_type) {
            self.dietary_types.push(dietary_type);
        }
        self
    }

    /// Add an allergy
    #[must_use]
    pub fn with_allergy(mut self, allergy: Allergy) -> Self {
        if !self.allergies.contains(&allergy) {
            self.allergies.push(allergy);
        }
        self
    }

    /// Add a dislike
    #[must_use]
    pub fn with_dislike(mut self, dislike: impl Into<String>) -> Self {
        self.dislikes.push(dislike.into());
        self
    }

    /// Set the special requirement note
    #[must_use]
    pub fn with_special_requirements(mut self, note: impl Into<String>) -> Self {
        self.special_requirements = Some(note.into());
        self
    }

    /// Whether an allergy tag is present
    #[must_use]
    pub fn has_allergy(&self, allergy: Allergy) -> bool {
        self.allergies.contains(&allergy)
    }

    /// Whether a dietary type tag is present
    #[must_use]
    pub fn has_dietary_type(&self, dietary_type: DietaryType) -> bool {
        self.dietary_types.contains(&dietary_type)
    }

    /// Whether any selected dietary type excludes onion and garlic
    #[must_use]
    pub fn excludes_onion_garlic(&self) -> bool {
        self.dietary_types
            .iter()
            .any(DietaryType::excludes_onion_garlic)
    }

    /// Dislikes trimmed and lowercased, blank entries dropped
    #[must_use]
    pub fn normalized_dislikes(&self) -> Vec<String> {
        self.dislikes
            .iter()
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect()
    }

    /// Special requirement note, `None` when blank
    #[must_use]
    pub fn special_requirements(&self) -> Option<&str> {
        self.special_requirements
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_labels_deserialize() {
        let prefs: DietaryPreferences = serde_json::from_str(
            r#"{"dietaryType":["Vegan","No Onion/Garlic"],"allergies":["Dairy","Nuts"],"dislikes":[" Okra ",""]}"#,
        )
        .unwrap();

        assert!(prefs.has_dietary_type(DietaryType::Vegan));
        assert!(prefs.excludes_onion_garlic());
        assert!(prefs.has_allergy(Allergy::Nuts));
        assert_eq!(prefs.normalized_dislikes(), vec!["okra".to_owned()]);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            "No Onion/Garlic".parse::<DietaryType>().unwrap(),
            DietaryType::NoOnionGarlic
        );
        assert_eq!("jain".parse::<DietaryType>().unwrap(), DietaryType::Jain);
        assert_eq!("egg".parse::<Allergy>().unwrap(), Allergy::Eggs);
        assert!("shellfish".parse::<Allergy>().is_err());
    }

    #[test]
    fn test_blank_special_requirements_is_none() {
        let prefs = DietaryPreferences::new().with_special_requirements("   ");
        assert!(prefs.special_requirements().is_none());
    }
}

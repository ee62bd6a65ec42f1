// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Rule numbers for scoring, diet planning, chat, and storage in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! Constants module
//!
//! Every number the rules engine depends on lives here under a name, grouped by
//! the domain that owns it.

/// Constitution scoring
pub mod scoring {
    /// Percentage scale the three axes are expressed on
    pub const PERCENT_SCALE: u32 = 100;
    /// Fallback split when no answers were tallied (vata, pitta, kapha)
    pub const FALLBACK_SPLIT: (u8, u8, u8) = (33, 33, 34);
    /// Lowest accepted total of three rounded percentages
    pub const MIN_TOTAL: u16 = 99;
    /// Highest accepted total of three rounded percentages
    pub const MAX_TOTAL: u16 = 101;
}

/// Food selection for diet plans
pub mod selection {
    /// Minimum per-axis compatibility for a food to be considered
    pub const COMPATIBILITY_THRESHOLD: f64 = 0.7;
    /// Vegetables drawn per meal slot (inclusive range)
    pub const VEGETABLES_PER_MEAL: (usize, usize) = (1, 2);
    /// Spices drawn per meal slot (inclusive range)
    pub const SPICES_PER_MEAL: (usize, usize) = (2, 3);
    /// Food names treated as gluten sources
    pub const GLUTEN_SOURCES: &[&str] = &["Wheat", "Barley", "Rye", "Semolina"];
    /// Food names treated as soy sources
    pub const SOY_SOURCES: &[&str] = &["Soy", "Soybean", "Soybeans", "Tofu", "Tempeh"];
    /// Food names treated as egg sources
    pub const EGG_SOURCES: &[&str] = &["Egg", "Eggs"];
    /// Food names excluded by no-onion/garlic and Jain diets
    pub const ONION_GARLIC: &[&str] = &["Onion", "Garlic"];
}

/// Placeholders used when a filtered category is empty
pub mod placeholders {
    /// Grain placeholder
    pub const GRAIN: &str = "Seasonal whole grains";
    /// Protein placeholder
    pub const PROTEIN: &str = "Light mung dal";
    /// Vegetable placeholder
    pub const VEGETABLES: &str = "Seasonal vegetables";
    /// Spice placeholder, used only when no spice list is known for the dosha
    pub const SPICES: &str = "Mild digestive spices";
}

/// Daily nutrition estimate
pub mod nutrition {
    /// Baseline daily calories for a vata-dominant plan
    pub const VATA_BASELINE_KCAL: u32 = 2000;
    /// Baseline daily calories for a pitta-dominant plan
    pub const PITTA_BASELINE_KCAL: u32 = 2200;
    /// Baseline daily calories for a kapha-dominant plan
    pub const KAPHA_BASELINE_KCAL: u32 = 1800;
    /// Window applied either side of the baseline
    pub const CALORIE_WINDOW_KCAL: u32 = 200;
    /// Protein share of calories (min, max percent)
    pub const PROTEIN_PERCENT: (f64, f64) = (12.0, 15.0);
    /// Carbohydrate share of calories (min, max percent)
    pub const CARBS_PERCENT: (f64, f64) = (50.0, 55.0);
    /// Fat share of calories (min, max percent)
    pub const FAT_PERCENT: (f64, f64) = (25.0, 30.0);
    /// Energy density of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Energy density of carbohydrate
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Energy density of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Guideline presentation
pub mod guidelines {
    /// Number of guidelines surfaced as key recommendations
    pub const KEY_RECOMMENDATION_COUNT: usize = 4;
}

/// Chat assistant
pub mod chat {
    /// Messages retained after the system prompt (ten exchanges)
    pub const MAX_HISTORY_MESSAGES: usize = 20;
    /// Replies longer than this get the assistant signature appended
    pub const SIGNATURE_MIN_LENGTH: usize = 200;
    /// Assistant name as shown to practitioners
    pub const ASSISTANT_NAME: &str = "AyurBot";
    /// Product name
    pub const PRODUCT_NAME: &str = "Vitarva";
    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    /// Default top-k sampling
    pub const DEFAULT_TOP_K: u32 = 40;
    /// Default nucleus sampling
    pub const DEFAULT_TOP_P: f32 = 0.95;
    /// Default output token cap
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;
}

/// Key-value storage
pub mod storage {
    /// Prefix shared by every key this application writes
    pub const NAMESPACE: &str = "vitarva:";
    /// Appointment list key
    pub const APPOINTMENTS_KEY: &str = "vitarva:appointments";
    /// Authentication flag key
    pub const AUTH_FLAG_KEY: &str = "vitarva:auth";
    /// Logged-in practitioner profile key
    pub const PRACTITIONER_KEY: &str = "vitarva:practitioner";
}

/// Patient records
pub mod patients {
    /// Current patient record schema tag
    pub const SCHEMA_V1: &str = "patient.v1";
    /// Oldest plausible patient age
    pub const MAX_AGE_YEARS: u32 = 130;
    /// Compliance is a percentage
    pub const MAX_COMPLIANCE: u8 = 100;
}

/// Service names used in logs
pub mod service_names {
    /// Default service name
    pub const VITARVA: &str = "vitarva";
}

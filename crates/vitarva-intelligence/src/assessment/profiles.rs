// ABOUTME: Descriptive dosha profiles shown alongside assessment results
// ABOUTME: Element, qualities, characteristics, imbalance symptoms, and balancing foods per dosha
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use serde::Serialize;
use vitarva_core::models::Dosha;

/// Static description of one dosha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaProfile {
    /// Which dosha
    pub dosha: Dosha,
    /// Governing elements
    pub element: &'static str,
    /// Gunas
    pub qualities: &'static [&'static str],
    /// Traits when in balance
    pub characteristics: &'static [&'static str],
    /// Signs of aggravation
    pub imbalance_symptoms: &'static [&'static str],
    /// Dietary direction
    pub balancing_foods: &'static [&'static str],
}

impl DoshaProfile {
    /// Profile for `dosha`
    #[must_use]
    pub fn of(dosha: Dosha) -> &'static Self {
        match dosha {
            Dosha::Vata => &VATA,
            Dosha::Pitta => &PITTA,
            Dosha::Kapha => &KAPHA,
        }
    }

    /// One-line summary, e.g. "Pitta (Fire + Water): Hot, Sharp, Light, Oily, Liquid"
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {}",
            self.dosha,
            self.element,
            self.qualities.join(", ")
        )
    }
}

static VATA: DoshaProfile = DoshaProfile {
    dosha: Dosha::Vata,
    element: "Air + Space",
    qualities: &["Light", "Dry", "Cold", "Rough", "Mobile"],
    characteristics: &[
        "Quick thinking and action",
        "Creative and enthusiastic",
        "Variable appetite and mood",
        "Light sleep, active mind",
    ],
    imbalance_symptoms: &[
        "Anxiety and worry",
        "Digestive issues",
        "Insomnia",
        "Dry skin and constipation",
    ],
    balancing_foods: &[
        "Warm, cooked foods",
        "Sweet, sour, salty tastes",
        "Ghee and oils",
        "Regular meal times",
    ],
};

static PITTA: DoshaProfile = DoshaProfile {
    dosha: Dosha::Pitta,
    element: "Fire + Water",
    qualities: &["Hot", "Sharp", "Light", "Oily", "Liquid"],
    characteristics: &[
        "Strong digestion and appetite",
        "Sharp intellect and focus",
        "Natural leadership qualities",
        "Moderate sleep needs",
    ],
    imbalance_symptoms: &[
        "Anger and irritability",
        "Acidity and heartburn",
        "Inflammation",
        "Skin rashes and sensitivity",
    ],
    balancing_foods: &[
        "Cool, refreshing foods",
        "Sweet, bitter, astringent tastes",
        "Fresh fruits and vegetables",
        "Avoid spicy and oily foods",
    ],
};

static KAPHA: DoshaProfile = DoshaProfile {
    dosha: Dosha::Kapha,
    element: "Earth + Water",
    qualities: &["Heavy", "Cold", "Moist", "Oily", "Stable"],
    characteristics: &[
        "Strong immunity and stamina",
        "Calm and steady nature",
        "Good long-term memory",
        "Deep, restful sleep",
    ],
    imbalance_symptoms: &[
        "Weight gain and sluggishness",
        "Depression and attachment",
        "Congestion and mucus",
        "Slow digestion",
    ],
    balancing_foods: &[
        "Light, warm foods",
        "Pungent, bitter, astringent tastes",
        "Spices and herbs",
        "Avoid heavy, oily foods",
    ],
};

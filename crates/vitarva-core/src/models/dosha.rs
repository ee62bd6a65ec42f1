// ABOUTME: Dosha axes and the validated three-axis constitution score
// ABOUTME: Dosha, ConstitutionScore, and the fixed dominant-axis tie-break rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::scoring::{FALLBACK_SPLIT, MAX_TOTAL, MIN_TOTAL, PERCENT_SCALE};
use crate::errors::{AppError, AppResult};

/// One of the three constitutional axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    /// Air + space
    #[serde(alias = "Vata")]
    Vata,
    /// Fire + water
    #[serde(alias = "Pitta")]
    Pitta,
    /// Earth + water
    #[serde(alias = "Kapha")]
    Kapha,
}

impl Dosha {
    /// All axes in tie-break priority order
    pub const ALL: [Self; 3] = [Self::Vata, Self::Pitta, Self::Kapha];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
        }
    }

    /// Capitalised name for display
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Dosha {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vata" => Ok(Self::Vata),
            "pitta" => Ok(Self::Pitta),
            "kapha" => Ok(Self::Kapha),
            other => Err(AppError::invalid_input(format!("Unknown dosha '{other}'"))),
        }
    }
}

/// Pick the dominant axis from three values.
///
/// Ties resolve by the fixed priority Vata > Pitta > Kapha.
#[must_use]
pub const fn dominant_of(vata: u32, pitta: u32, kapha: u32) -> Dosha {
    if vata >= pitta && vata >= kapha {
        Dosha::Vata
    } else if pitta >= kapha {
        Dosha::Pitta
    } else {
        Dosha::Kapha
    }
}

/// Unchecked wire shape, validated into [`ConstitutionScore`]
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawScore {
    vata: u8,
    pitta: u8,
    kapha: u8,
}

/// Percentages across the three axes.
///
/// The total is 100 give or take one point of rounding; constructing a score
/// outside that tolerance is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScore")]
pub struct ConstitutionScore {
    vata: u8,
    pitta: u8,
    kapha: u8,
}

impl ConstitutionScore {
    /// Create a validated score
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if any axis exceeds 100 or the total falls
    /// outside 99..=101
    pub fn new(vata: u8, pitta: u8, kapha: u8) -> AppResult<Self> {
        for (dosha, value) in [(Dosha::Vata, vata), (Dosha::Pitta, pitta), (Dosha::Kapha, kapha)] {
            if u32::from(value) > PERCENT_SCALE {
                return Err(AppError::value_out_of_range(format!(
                    "{dosha} score {value} exceeds {PERCENT_SCALE}"
                ))
                .with_details(serde_json::json!({ dosha.as_str(): value })));
            }
        }

        let total = u16::from(vata) + u16::from(pitta) + u16::from(kapha);
        if !(MIN_TOTAL..=MAX_TOTAL).contains(&total) {
            return Err(AppError::value_out_of_range(format!(
                "Constitution score must total {MIN_TOTAL}-{MAX_TOTAL}, got {total}"
            ))
            .with_details(serde_json::json!({
                "vata": vata,
                "pitta": pitta,
                "kapha": kapha,
                "total": total,
            })));
        }

        Ok(Self { vata, pitta, kapha })
    }

    /// Even split used when nothing was tallied
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            vata: FALLBACK_SPLIT.0,
            pitta: FALLBACK_SPLIT.1,
            kapha: FALLBACK_SPLIT.2,
        }
    }

    /// Score from raw per-axis counts.
    ///
    /// Each axis is `count / total * 100` rounded half up, so the total lands
    /// in 99..=101. A zero total yields [`ConstitutionScore::fallback`].
    #[must_use]
    pub fn from_counts(vata: u32, pitta: u32, kapha: u32) -> Self {
        let total = u64::from(vata) + u64::from(pitta) + u64::from(kapha);
        if total == 0 {
            return Self::fallback();
        }
        Self {
            vata: rounded_percent(vata, total),
            pitta: rounded_percent(pitta, total),
            kapha: rounded_percent(kapha, total),
        }
    }

    /// Vata percentage
    #[must_use]
    pub const fn vata(&self) -> u8 {
        self.vata
    }

    /// Pitta percentage
    #[must_use]
    pub const fn pitta(&self) -> u8 {
        self.pitta
    }

    /// Kapha percentage
    #[must_use]
    pub const fn kapha(&self) -> u8 {
        self.kapha
    }

    /// Percentage for one axis
    #[must_use]
    pub const fn get(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Sum of the three percentages (99..=101)
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.vata as u16 + self.pitta as u16 + self.kapha as u16
    }

    /// Highest-scoring axis, ties broken Vata > Pitta > Kapha
    #[must_use]
    pub const fn dominant(&self) -> Dosha {
        dominant_of(self.vata as u32, self.pitta as u32, self.kapha as u32)
    }
}

/// `count / total` as a percentage rounded half up; `count <= total`
fn rounded_percent(count: u32, total: u64) -> u8 {
    let scale = u64::from(PERCENT_SCALE);
    let percent = (u64::from(count) * scale * 2 + total) / (total * 2);
    u8::try_from(percent.min(scale)).unwrap_or(u8::MAX)
}

impl TryFrom<RawScore> for ConstitutionScore {
    type Error = AppError;

    fn try_from(raw: RawScore) -> Result<Self, Self::Error> {
        Self::new(raw.vata, raw.pitta, raw.kapha)
    }
}

impl fmt::Display for ConstitutionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vata {}% / Pitta {}% / Kapha {}%",
            self.vata, self.pitta, self.kapha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_tie_break_priority() {
        assert_eq!(dominant_of(40, 40, 20), Dosha::Vata);
        assert_eq!(dominant_of(20, 40, 40), Dosha::Pitta);
        assert_eq!(dominant_of(40, 20, 40), Dosha::Vata);
        assert_eq!(dominant_of(33, 33, 34), Dosha::Kapha);
    }

    #[test]
    fn test_rounded_percent_half_up() {
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(1, 8), 13);
        assert_eq!(rounded_percent(5, 5), 100);
        assert_eq!(rounded_percent(0, 5), 0);
    }

    #[test]
    fn test_from_counts() {
        let score = ConstitutionScore::from_counts(10, 3, 2);
        assert_eq!((score.vata(), score.pitta(), score.kapha()), (67, 20, 13));
        assert_eq!(ConstitutionScore::from_counts(0, 0, 0), ConstitutionScore::fallback());
        assert_eq!(ConstitutionScore::from_counts(1, 1, 1).total(), 99);
    }

    #[test]
    fn test_rounding_tolerance_accepted() {
        assert!(ConstitutionScore::new(33, 33, 33).is_ok());
        assert!(ConstitutionScore::new(34, 34, 33).is_ok());
        assert!(ConstitutionScore::new(30, 30, 30).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ConstitutionScore =
            serde_json::from_str(r#"{"vata":60,"pitta":30,"kapha":10}"#).unwrap();
        assert_eq!(ok.dominant(), Dosha::Vata);

        let bad = serde_json::from_str::<ConstitutionScore>(r#"{"vata":90,"pitta":90,"kapha":0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_dosha_parse() {
        assert_eq!("  Pitta ".parse::<Dosha>().unwrap(), Dosha::Pitta);
        assert!("air".parse::<Dosha>().is_err());
    }
}

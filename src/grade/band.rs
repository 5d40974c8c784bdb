//! Performance bands.
//!
//! Every comparison happens on the canonical 0–20 scale. Lower bounds
//! are inclusive, and inputs outside 0–20 (or NaN) still land in a band:
//! anything at or above 16 is excellent, anything else below 4 is poor.

use std::fmt;

use serde::Serialize;

/// Overall performance band of a normalized grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Poor,
    Below,
    Average,
    Good,
    Excellent,
}

impl Band {
    /// Best first.
    pub const ALL: [Band; 5] = [
        Band::Excellent,
        Band::Good,
        Band::Average,
        Band::Below,
        Band::Poor,
    ];

    pub fn classify(score_on_20: f64) -> Band {
        if score_on_20 >= 16.0 {
            Band::Excellent
        } else if score_on_20 >= 12.0 {
            Band::Good
        } else if score_on_20 >= 8.0 {
            Band::Average
        } else if score_on_20 >= 4.0 {
            Band::Below
        } else {
            Band::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Below => "below",
            Self::Poor => "poor",
        }
    }

    /// Label used when describing the overall level to the student.
    pub fn label_fr(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "satisfaisant",
            Self::Average => "moyen",
            Self::Below => "insuffisant",
            Self::Poor => "en grande difficulté",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse level of a single criterion, used to pick a phrase snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionLevel {
    High,
    Medium,
    Low,
}

impl CriterionLevel {
    pub fn classify(score_on_20: f64) -> CriterionLevel {
        if score_on_20 >= 14.0 {
            CriterionLevel::High
        } else if score_on_20 >= 8.0 {
            CriterionLevel::Medium
        } else {
            CriterionLevel::Low
        }
    }

    /// Level of `score` once rescaled from `0..max_score` onto 0–20.
    pub fn from_score(score: f64, max_score: f64) -> CriterionLevel {
        Self::classify(normalize_to_20(score, max_score))
    }
}

/// Re-express `value` from a `0..scale` range onto 0–20.
/// A non-positive or non-finite scale maps everything to 0.
pub fn normalize_to_20(value: f64, scale: f64) -> f64 {
    if !(scale.is_finite() && scale > 0.0) {
        return 0.0;
    }
    value / scale * 20.0
}

#[cfg(test)]
#[path = "band_test.rs"]
mod tests;

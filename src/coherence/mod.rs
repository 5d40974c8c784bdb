//! Score/grade coherence audit.
//!
//! Compares the mean of the raw slider scores with the final grade (both
//! on a 0–20 basis) and flags combinations that tell inconsistent
//! stories, e.g. uniformly high sliders next to a low grade.
//!
//! The raw scores are re-expressed as if they were entered on the
//! session scale, not on the 0–20 slider scale. With a scale of 20 the
//! two coincide; with any other scale the comparison is skewed. This
//! matches how existing sessions were audited and is kept as is.

use std::fmt;

use serde::Serialize;

use crate::grade::normalize_to_20;
use crate::session::ScoreSet;
use crate::util::mean;

/// Largest tolerated gap between mean score and grade, on 0–20.
pub const MAX_GAP_ON_20: f64 = 4.0;

/// Share of scores above which a distribution counts as one-sided.
pub const EXTREME_SHARE: f64 = 0.7;

const EXCELLENT_SCORE: f64 = 16.0;
const WEAK_SCORE: f64 = 8.0;
const MODEST_GRADE: f64 = 12.0;
const HIGH_GRADE: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceWarning {
    /// Sliders mostly positive, grade low.
    ScoresAboveGrade,
    /// Sliders mostly low, grade high.
    ScoresBelowGrade,
    /// Most criteria excellent, grade modest.
    ExcellentButModest,
    /// Most criteria weak, grade high.
    WeakButHigh,
}

impl CoherenceWarning {
    pub fn message(self) -> &'static str {
        match self {
            Self::ScoresAboveGrade => {
                "Les curseurs sont plutôt positifs mais la note calculée est basse. Vérifiez les pondérations."
            }
            Self::ScoresBelowGrade => {
                "Les curseurs sont plutôt bas mais la note calculée est élevée. Vérifiez les pondérations."
            }
            Self::ExcellentButModest => {
                "La majorité des critères sont 'Excellent' mais la note reste modeste."
            }
            Self::WeakButHigh => "La majorité des critères sont faibles mais la note est élevée.",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::ScoresAboveGrade => "scores_above_grade",
            Self::ScoresBelowGrade => "scores_below_grade",
            Self::ExcellentButModest => "excellent_but_modest",
            Self::WeakButHigh => "weak_but_high",
        }
    }
}

impl fmt::Display for CoherenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Audit `final_grade` against the raw scores it came from (or was
/// overridden over). Returns `None` when nothing looks off, when there
/// are no scores, or when the scale is unusable.
///
/// The gap check runs first; the one-sided distribution checks only
/// apply when the gap is tolerated.
pub fn check_coherence(
    scores: &ScoreSet,
    final_grade: f64,
    target_scale: f64,
) -> Option<CoherenceWarning> {
    if !(target_scale.is_finite() && target_scale > 0.0) {
        return None;
    }
    let values: Vec<f64> = scores
        .values()
        .map(|s| if s.is_finite() { s } else { 0.0 })
        .collect();
    let avg_on_20 = normalize_to_20(mean(&values)?, target_scale);
    let grade_on_20 = normalize_to_20(final_grade, target_scale);

    if (avg_on_20 - grade_on_20).abs() > MAX_GAP_ON_20 {
        let warning = if avg_on_20 > grade_on_20 {
            CoherenceWarning::ScoresAboveGrade
        } else {
            CoherenceWarning::ScoresBelowGrade
        };
        return Some(warning);
    }

    let count = values.len() as f64;
    let excellent = values
        .iter()
        .filter(|&&s| normalize_to_20(s, target_scale) >= EXCELLENT_SCORE)
        .count() as f64;
    let weak = values
        .iter()
        .filter(|&&s| normalize_to_20(s, target_scale) < WEAK_SCORE)
        .count() as f64;

    if excellent > count * EXTREME_SHARE && grade_on_20 < MODEST_GRADE {
        return Some(CoherenceWarning::ExcellentButModest);
    }
    if weak > count * EXTREME_SHARE && grade_on_20 >= HIGH_GRADE {
        return Some(CoherenceWarning::WeakButHigh);
    }
    None
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

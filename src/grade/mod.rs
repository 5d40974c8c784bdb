//! Weighted grade computation.
//!
//! Each criterion's raw slider score (0–20) is turned into a fraction,
//! weighted, and the weighted mean is expressed on the session scale.
//! Weights are relative: they need not sum to any particular total.

pub mod band;
mod report;

use std::error::Error;
use std::path::Path;

use crate::coherence::{CoherenceWarning, check_coherence};
use crate::session::{Criterion, RAW_SCORE_SCALE, ScoreSet, Session};

pub use band::{Band, CriterionLevel, normalize_to_20};
use report::{print_json, print_report};

/// Final grade for one student, as listed by `sqg grade`.
#[derive(Debug, Clone)]
pub struct GradedStudent {
    pub name: String,
    pub computed: f64,
    pub final_grade: f64,
    pub overridden: bool,
    pub completed: bool,
    pub band: Band,
    pub warning: Option<CoherenceWarning>,
}

pub fn run(path: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let session = Session::load(path)?;
    let graded = grade_session(&session);

    if json {
        print_json(&session, &graded)?;
    } else {
        print_report(&session, &graded);
    }
    Ok(())
}

/// Grade every student of the session and audit each score/grade pair.
pub fn grade_session(session: &Session) -> Vec<GradedStudent> {
    let scale = session.max_grade;
    session
        .students
        .iter()
        .map(|student| {
            let computed = compute_grade(&session.criteria, &student.scores, scale);
            let final_grade = student.grade_override.unwrap_or(computed);
            let warning = check_coherence(&student.scores, final_grade, scale);
            tracing::debug!(
                student = %student.name,
                computed,
                final_grade,
                warning = warning.map(|w| w.code()),
                "graded"
            );
            GradedStudent {
                name: student.name.clone(),
                computed,
                final_grade,
                overridden: student.grade_override.is_some(),
                completed: student.is_completed(),
                band: Band::classify(normalize_to_20(final_grade, scale)),
                warning,
            }
        })
        .collect()
}

/// Weighted final grade on `target_scale`, rounded to one decimal.
///
/// Never fails: an empty criteria list, a zero weight sum or a
/// non-positive scale all yield 0. Criteria with a non-positive weight
/// are left out of both the numerator and the denominator.
pub fn compute_grade(criteria: &[Criterion], scores: &ScoreSet, target_scale: f64) -> f64 {
    if !(target_scale.is_finite() && target_scale > 0.0) {
        return 0.0;
    }

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for c in criteria {
        if !(c.weight.is_finite() && c.weight > 0.0) {
            continue;
        }
        weighted_sum += scores.get(&c.id) / RAW_SCORE_SCALE * c.weight;
        weight_sum += c.weight;
    }

    if weight_sum == 0.0 {
        return 0.0;
    }
    round_tenth(weighted_sum / weight_sum * target_scale)
}

/// Round to one decimal place, halves away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

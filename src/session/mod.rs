//! Grading session data model.
//!
//! A session fixes the grading scale and the weighted criteria; each
//! student record carries the raw slider scores (always on a 0–20
//! sub-scale), an optional free-text note, and any teacher override of
//! the computed grade or of the generated feedback.

pub mod presets;
mod report;

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::grade::compute_grade;

pub use presets::Preset;
pub use report::{print_presets, print_presets_json};

/// Upper bound of the slider scale every raw score is entered on.
pub const RAW_SCORE_SCALE: f64 = 20.0;

/// One weighted evaluation axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    pub weight: f64,
    #[serde(alias = "maxScore", default)]
    pub max_score: f64,
}

impl Criterion {
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: f64, max_score: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            max_score,
        }
    }

    /// Ceiling used to band this criterion's own score: its `max_score`,
    /// else the session scale, else the raw slider scale.
    pub fn effective_max(&self, scale: f64) -> f64 {
        if self.max_score > 0.0 {
            self.max_score
        } else if scale > 0.0 {
            scale
        } else {
            RAW_SCORE_SCALE
        }
    }
}

/// Raw per-criterion scores keyed by criterion id. Missing ids read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSet(BTreeMap<String, f64>);

impl ScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `id`, or 0 when absent or not a finite number.
    pub fn get(&self, id: &str) -> f64 {
        self.0
            .get(id)
            .copied()
            .filter(|s| s.is_finite())
            .unwrap_or(0.0)
    }

    /// Every stored score, including ids no criterion knows about.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ScoreSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One student's grading artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    #[serde(default)]
    pub scores: ScoreSet,
    #[serde(default)]
    pub note: String,
    #[serde(default, alias = "customGrade")]
    pub grade_override: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl StudentRecord {
    /// Teacher override if present, otherwise the computed grade.
    pub fn final_grade(&self, criteria: &[Criterion], scale: f64) -> f64 {
        self.grade_override
            .unwrap_or_else(|| compute_grade(criteria, &self.scores, scale))
    }

    pub fn is_completed(&self) -> bool {
        !self.scores.is_empty() || self.grade_override.is_some()
    }
}

/// A grading pass over a batch of submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "maxGrade")]
    pub max_grade: f64,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Load a session from a `.toml` or `.json` file, expanding a named
    /// preset when no criteria are listed.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let session: Session = match ext.as_deref() {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => return Err(SessionError::UnsupportedFormat(path.to_path_buf())),
        };
        session.resolve()
    }

    /// Check the preset name, fill in preset criteria and a default name.
    /// Criteria listed in the file win over the preset's.
    pub fn resolve(mut self) -> Result<Self, SessionError> {
        let preset = self.preset.as_deref().map(str::parse::<Preset>).transpose()?;
        if self.criteria.is_empty() {
            let preset = preset.ok_or(SessionError::NoCriteria)?;
            self.criteria = preset.criteria(self.max_grade);
        }
        if self.name.trim().is_empty() {
            self.name = default_name(self.created_at);
        }
        Ok(self)
    }

    pub fn completed_students(&self) -> impl Iterator<Item = &StudentRecord> {
        self.students.iter().filter(|s| s.is_completed())
    }

    pub fn find_student(&self, name: &str) -> Option<&StudentRecord> {
        self.students
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

fn default_name(created_at: Option<DateTime<Utc>>) -> String {
    let date = created_at
        .map(|t| t.with_timezone(&Local))
        .unwrap_or_else(Local::now);
    format!("Session du {}", date.format("%d/%m/%Y"))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

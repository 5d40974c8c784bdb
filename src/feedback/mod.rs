//! Template-based feedback.
//!
//! Feedback is assembled from phrase tables: an opening and a
//! development line for the overall band, dedicated lines for criteria
//! whose id or name matches a known keyword, the teacher's own note, and
//! a closing line. Phrase choice within a slot goes through a
//! [`PhrasePicker`], so the structure is fixed while the wording varies
//! from one call to the next unless a deterministic picker is supplied.

pub mod criteria;
pub mod phrases;
pub mod picker;

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::FeedbackError;
use crate::grade::{Band, CriterionLevel, normalize_to_20};
use crate::session::{Criterion, ScoreSet};

pub use picker::{FirstPicker, PhrasePicker, RandomPicker};

use criteria::match_criterion;
use phrases::{IMPROVEMENT_LEAD, NOTE_PREFIX};

/// How many criterion lines of each kind make it into the feedback.
const MAX_HIGH_LINES: usize = 2;
const MAX_MEDIUM_LINES: usize = 1;
const MAX_LOW_LINES: usize = 2;

/// Everything a feedback writer needs for one student.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackInput<'a> {
    pub criteria: &'a [Criterion],
    pub scores: &'a ScoreSet,
    pub note: &'a str,
    pub final_grade: f64,
    pub scale: f64,
}

impl FeedbackInput<'_> {
    /// Band of the final grade on the 0–20 basis.
    pub fn band(&self) -> Band {
        Band::classify(normalize_to_20(self.final_grade, self.scale))
    }

    /// Trimmed teacher note, if any.
    pub fn trimmed_note(&self) -> Option<&str> {
        Some(self.note.trim()).filter(|n| !n.is_empty())
    }
}

/// Who wrote a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackOrigin {
    Ai,
    Template,
    Teacher,
}

impl FeedbackOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Template => "template",
            Self::Teacher => "teacher",
        }
    }
}

/// A way to write feedback for a student. Template and language-model
/// writers share this contract so callers can swap or chain them.
#[async_trait]
pub trait FeedbackSource: Send + Sync {
    /// Label for logs.
    fn name(&self) -> &'static str;

    fn origin(&self) -> FeedbackOrigin;

    async fn generate(&self, input: &FeedbackInput<'_>) -> Result<String, FeedbackError>;
}

/// Compose feedback from the phrase tables.
///
/// Paragraphs are separated by a blank line: the assessment (band lines
/// and criterion lines joined by single spaces), then the teacher note
/// when present, then the closing line.
pub fn synthesize(input: &FeedbackInput<'_>, picker: &mut impl PhrasePicker) -> String {
    let band_phrases = phrases::for_band(input.band());

    let mut sentences: Vec<String> = vec![
        picker.pick(band_phrases.intro).to_string(),
        picker.pick(band_phrases.body).to_string(),
    ];

    let mut high = Vec::new();
    let mut medium = Vec::new();
    let mut low = Vec::new();
    for c in input.criteria {
        let Some(entry) = match_criterion(c) else {
            continue;
        };
        let score = input.scores.get(&c.id);
        let level = CriterionLevel::from_score(score, c.effective_max(input.scale));
        let line = entry.for_level(level);
        match level {
            CriterionLevel::High => high.push(line),
            CriterionLevel::Medium => medium.push(line),
            CriterionLevel::Low => low.push(line),
        }
    }

    sentences.extend(high.iter().take(MAX_HIGH_LINES).map(|s| s.to_string()));
    if high.len() < MAX_HIGH_LINES {
        sentences.extend(medium.iter().take(MAX_MEDIUM_LINES).map(|s| s.to_string()));
    }
    if !low.is_empty() {
        let items: Vec<String> = low
            .iter()
            .take(MAX_LOW_LINES)
            .map(|s| s.trim_end_matches('.').to_lowercase())
            .collect();
        sentences.push(format!("{IMPROVEMENT_LEAD}{}.", items.join(", ")));
    }

    let mut text = sentences.join(" ");
    if let Some(note) = input.trimmed_note() {
        text.push_str("\n\n");
        text.push_str(NOTE_PREFIX);
        text.push_str(note);
    }
    text.push_str("\n\n");
    text.push_str(picker.pick(band_phrases.conclusion));

    text.trim().to_string()
}

/// [`FeedbackSource`] over [`synthesize`]. Never fails.
#[derive(Debug)]
pub struct TemplateSynthesizer<P = RandomPicker> {
    picker: Mutex<P>,
}

impl TemplateSynthesizer<RandomPicker> {
    pub fn new() -> Self {
        Self::with_picker(RandomPicker::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_picker(RandomPicker::seeded(seed))
    }
}

impl Default for TemplateSynthesizer<RandomPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PhrasePicker> TemplateSynthesizer<P> {
    pub fn with_picker(picker: P) -> Self {
        Self {
            picker: Mutex::new(picker),
        }
    }

    pub fn write(&self, input: &FeedbackInput<'_>) -> String {
        let mut picker = self.picker.lock().unwrap_or_else(PoisonError::into_inner);
        synthesize(input, &mut *picker)
    }
}

#[async_trait]
impl<P: PhrasePicker + Send> FeedbackSource for TemplateSynthesizer<P> {
    fn name(&self) -> &'static str {
        "template"
    }

    fn origin(&self) -> FeedbackOrigin {
        FeedbackOrigin::Template
    }

    async fn generate(&self, input: &FeedbackInput<'_>) -> Result<String, FeedbackError> {
        Ok(self.write(input))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

//! Full generation pass: grade, write feedback, audit coherence.
//!
//! Feedback comes from the language model when asked for and configured,
//! raced against a timeout. Any failure falls back to template feedback
//! within the same attempt and leaves a notice for the teacher. Feedback
//! already edited by the teacher is final and never regenerated.

mod report;

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use crate::ai::{AiSynthesizer, is_available};
use crate::coherence::{CoherenceWarning, check_coherence};
use crate::config::AiConfig;
use crate::error::FeedbackError;
use crate::feedback::{FeedbackInput, FeedbackSource, TemplateSynthesizer};
use crate::grade::Band;
use crate::session::{Session, StudentRecord};

use report::{print_json, print_report};

pub use crate::feedback::FeedbackOrigin;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFeedback {
    pub text: String,
    pub origin: FeedbackOrigin,
    /// Non-blocking message for the teacher, set when the primary source
    /// failed and the fallback was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReviewedStudent {
    pub name: String,
    pub final_grade: f64,
    pub band: Band,
    pub feedback: GeneratedFeedback,
    pub warning: Option<CoherenceWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewOptions {
    pub student: Option<String>,
    pub ai: bool,
    pub seed: Option<u64>,
    pub timeout: Option<Duration>,
    pub model: Option<String>,
    pub json: bool,
}

pub async fn run(
    path: &Path,
    options: ReviewOptions,
    config: AiConfig,
) -> Result<(), Box<dyn Error>> {
    let session = Session::load(path)?;

    let template = match options.seed {
        Some(seed) => TemplateSynthesizer::seeded(seed),
        None => TemplateSynthesizer::new(),
    };

    let config = match options.model {
        Some(model) => config.with_model(model),
        None => config,
    };
    let (ai, setup_notice) = ai_source(options.ai, config);
    let primary = ai.as_ref().map(|a| a as &dyn FeedbackSource);

    let students: Vec<&StudentRecord> = match options.student.as_deref() {
        Some(name) => vec![
            session
                .find_student(name)
                .ok_or_else(|| format!("no student named '{name}' in {}", session.name))?,
        ],
        None => session.completed_students().collect(),
    };

    let timeout = options.timeout.unwrap_or(DEFAULT_TIMEOUT);
    let reviewed = review_students(&session, &students, primary, &template, timeout).await?;

    if options.json {
        print_json(&session, &reviewed, setup_notice.as_deref())?;
    } else {
        print_report(&session, &reviewed, setup_notice.as_deref());
    }
    Ok(())
}

/// The language-model source, when requested and usable. Otherwise
/// `None` plus a notice for the teacher; setup problems never stop a
/// review, templates take over.
pub fn ai_source(requested: bool, config: AiConfig) -> (Option<AiSynthesizer>, Option<String>) {
    if !requested {
        return (None, None);
    }
    if !is_available(&config) {
        tracing::warn!("AI feedback requested but no API key is configured");
        let notice = "IA non configurée (SQG_AI_API_KEY ou GROQ_API_KEY absente) : \
                      appréciations générées à partir des modèles.";
        return (None, Some(notice.to_string()));
    }
    match AiSynthesizer::new(config) {
        Ok(ai) => (Some(ai), None),
        Err(err) => {
            tracing::warn!(code = err.code(), error = %err, "AI feedback unavailable");
            let notice =
                format!("IA indisponible ({err}) : appréciations générées à partir des modèles.");
            (None, Some(notice))
        }
    }
}

/// Review each student in turn. Requests for different students are
/// independent, so they run one after another.
pub async fn review_students(
    session: &Session,
    students: &[&StudentRecord],
    primary: Option<&dyn FeedbackSource>,
    fallback: &dyn FeedbackSource,
    timeout: Duration,
) -> Result<Vec<ReviewedStudent>, FeedbackError> {
    let mut reviewed = Vec::with_capacity(students.len());
    for student in students {
        reviewed.push(review_student(session, student, primary, fallback, timeout).await?);
    }
    Ok(reviewed)
}

pub async fn review_student(
    session: &Session,
    student: &StudentRecord,
    primary: Option<&dyn FeedbackSource>,
    fallback: &dyn FeedbackSource,
    timeout: Duration,
) -> Result<ReviewedStudent, FeedbackError> {
    let scale = session.max_grade;
    let final_grade = student.final_grade(&session.criteria, scale);
    let input = FeedbackInput {
        criteria: &session.criteria,
        scores: &student.scores,
        note: &student.note,
        final_grade,
        scale,
    };

    let edited = student
        .feedback
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty());
    let feedback = match (edited, primary) {
        (Some(text), _) => GeneratedFeedback {
            text: text.to_string(),
            origin: FeedbackOrigin::Teacher,
            notice: None,
        },
        (None, Some(primary)) => generate_with_fallback(primary, fallback, &input, timeout).await?,
        (None, None) => GeneratedFeedback {
            text: fallback.generate(&input).await?,
            origin: fallback.origin(),
            notice: None,
        },
    };

    let warning = check_coherence(&student.scores, final_grade, scale);
    if let Some(w) = warning {
        tracing::warn!(student = %student.name, warning = w.code(), "incoherent grade");
    }

    Ok(ReviewedStudent {
        name: student.name.clone(),
        final_grade,
        band: input.band(),
        feedback,
        warning,
    })
}

/// Try `primary` within `timeout`; on any failure use `fallback`.
///
/// Only a failing fallback surfaces as an error.
pub async fn generate_with_fallback(
    primary: &dyn FeedbackSource,
    fallback: &dyn FeedbackSource,
    input: &FeedbackInput<'_>,
    timeout: Duration,
) -> Result<GeneratedFeedback, FeedbackError> {
    tracing::info!(source = primary.name(), ?timeout, "generating feedback");

    let outcome = tokio::time::timeout(timeout, primary.generate(input))
        .await
        .unwrap_or(Err(FeedbackError::TimedOut(timeout)));

    match outcome {
        Ok(text) => Ok(GeneratedFeedback {
            text,
            origin: primary.origin(),
            notice: None,
        }),
        Err(err) => {
            tracing::warn!(
                source = primary.name(),
                fallback = fallback.name(),
                code = err.code(),
                error = %err,
                "feedback source failed, using fallback"
            );
            let text = fallback.generate(input).await?;
            Ok(GeneratedFeedback {
                text,
                origin: fallback.origin(),
                notice: Some(format!(
                    "Erreur IA ({err}) : appréciation générée à partir des modèles."
                )),
            })
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

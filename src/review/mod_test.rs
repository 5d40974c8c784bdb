use super::*;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::ai::AiError;
use crate::config::AiConfig;
use crate::feedback::FirstPicker;
use crate::session::Criterion;

struct Fixed(&'static str);

#[async_trait]
impl FeedbackSource for Fixed {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn origin(&self) -> FeedbackOrigin {
        FeedbackOrigin::Ai
    }

    async fn generate(&self, _: &FeedbackInput<'_>) -> Result<String, FeedbackError> {
        Ok(self.0.to_string())
    }
}

#[derive(Default)]
struct Failing {
    calls: AtomicUsize,
}

#[async_trait]
impl FeedbackSource for Failing {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn origin(&self) -> FeedbackOrigin {
        FeedbackOrigin::Ai
    }

    async fn generate(&self, _: &FeedbackInput<'_>) -> Result<String, FeedbackError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AiError::Unauthorized {
            status: 401,
            message: "Invalid API Key".into(),
        }
        .into())
    }
}

/// Logs under a provider name but still writes AI feedback.
struct Named(&'static str);

#[async_trait]
impl FeedbackSource for Named {
    fn name(&self) -> &'static str {
        self.0
    }

    fn origin(&self) -> FeedbackOrigin {
        FeedbackOrigin::Ai
    }

    async fn generate(&self, _: &FeedbackInput<'_>) -> Result<String, FeedbackError> {
        Ok("Oral maîtrisé.".to_string())
    }
}

struct Slow;

#[async_trait]
impl FeedbackSource for Slow {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn origin(&self) -> FeedbackOrigin {
        FeedbackOrigin::Ai
    }

    async fn generate(&self, _: &FeedbackInput<'_>) -> Result<String, FeedbackError> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok("trop tard".to_string())
    }
}

fn session() -> Session {
    Session {
        name: "Oral 1re".into(),
        max_grade: 20.0,
        preset: None,
        criteria: vec![Criterion::new("contenu", "Contenu", 1.0, 20.0)],
        students: vec![
            StudentRecord {
                name: "Inès".into(),
                scores: [("contenu", 18.0)].into_iter().collect(),
                note: "Belle présence.".into(),
                ..Default::default()
            },
            StudentRecord {
                name: "Marc".into(),
                scores: [("contenu", 18.0)].into_iter().collect(),
                grade_override: Some(5.0),
                feedback: Some("  Appréciation rédigée à la main.  ".into()),
                ..Default::default()
            },
        ],
        created_at: None,
    }
}

fn input_for<'a>(session: &'a Session, student: &'a StudentRecord) -> FeedbackInput<'a> {
    FeedbackInput {
        criteria: &session.criteria,
        scores: &student.scores,
        note: &student.note,
        final_grade: student.final_grade(&session.criteria, session.max_grade),
        scale: session.max_grade,
    }
}

#[tokio::test]
async fn primary_success_is_used() {
    let s = session();
    let template = TemplateSynthesizer::with_picker(FirstPicker);
    let out = generate_with_fallback(
        &Fixed("Très bon oral."),
        &template,
        &input_for(&s, &s.students[0]),
        Duration::from_secs(1),
    )
    .await
    .unwrap();
    assert_eq!(out.text, "Très bon oral.");
    assert_eq!(out.origin, FeedbackOrigin::Ai);
    assert_eq!(out.notice, None);
}

#[tokio::test]
async fn failure_falls_back_with_notice() {
    let s = session();
    let template = TemplateSynthesizer::with_picker(FirstPicker);
    let failing = Failing::default();
    let out = generate_with_fallback(
        &failing,
        &template,
        &input_for(&s, &s.students[0]),
        Duration::from_secs(1),
    )
    .await
    .unwrap();

    assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
    assert_eq!(out.origin, FeedbackOrigin::Template);
    assert!(out.text.starts_with("Excellent travail !"));
    assert!(out.text.contains("Belle présence."));
    let notice = out.notice.unwrap();
    assert!(notice.contains("Invalid API Key"), "{notice}");
}

#[tokio::test]
async fn timeout_falls_back() {
    let s = session();
    let template = TemplateSynthesizer::with_picker(FirstPicker);
    let out = generate_with_fallback(
        &Slow,
        &template,
        &input_for(&s, &s.students[0]),
        Duration::from_millis(50),
    )
    .await
    .unwrap();
    assert_eq!(out.origin, FeedbackOrigin::Template);
    assert!(out.notice.unwrap().contains("timed out"));
}

#[tokio::test]
async fn teacher_feedback_is_never_regenerated() {
    let s = session();
    let template = TemplateSynthesizer::with_picker(FirstPicker);
    let failing = Failing::default();
    let r = review_student(
        &s,
        &s.students[1],
        Some(&failing as &dyn FeedbackSource),
        &template,
        Duration::from_secs(1),
    )
    .await
    .unwrap();

    assert_eq!(failing.calls.load(Ordering::SeqCst), 0);
    assert_eq!(r.feedback.origin, FeedbackOrigin::Teacher);
    assert_eq!(r.feedback.text, "Appréciation rédigée à la main.");
}

#[tokio::test]
async fn override_drives_band_and_coherence() {
    let s = session();
    let template = TemplateSynthesizer::with_picker(FirstPicker);
    let r = review_student(&s, &s.students[1], None, &template, Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(r.final_grade, 5.0);
    assert_eq!(r.band, Band::Below);
    assert_eq!(r.warning, Some(CoherenceWarning::ScoresAboveGrade));
}

#[tokio::test]
async fn template_only_without_primary() {
    let s = session();
    let template = TemplateSynthesizer::with_picker(FirstPicker);
    let students: Vec<&StudentRecord> = s.students.iter().collect();
    let reviewed = review_students(&s, &students, None, &template, Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(reviewed.len(), 2);
    assert_eq!(reviewed[0].feedback.origin, FeedbackOrigin::Template);
    assert_eq!(reviewed[0].final_grade, 18.0);
    assert_eq!(reviewed[0].warning, None);
    assert_eq!(reviewed[1].feedback.origin, FeedbackOrigin::Teacher);
}

#[test]
fn origin_serializes_lowercase() {
    let g = GeneratedFeedback {
        text: "ok".into(),
        origin: FeedbackOrigin::Template,
        notice: None,
    };
    let v = serde_json::to_value(&g).unwrap();
    assert_eq!(v["origin"], "template");
    assert!(v.get("notice").is_none());
}

#[tokio::test]
async fn origin_comes_from_the_source_not_its_name() {
    let s = session();
    let template = TemplateSynthesizer::with_picker(FirstPicker);
    let out = generate_with_fallback(
        &Named("groq"),
        &template,
        &input_for(&s, &s.students[0]),
        Duration::from_secs(1),
    )
    .await
    .unwrap();
    assert_eq!(out.origin, FeedbackOrigin::Ai);
    assert_eq!(out.notice, None);
}

fn config_with_key(key: &str) -> AiConfig {
    let key = key.to_string();
    AiConfig::from_lookup(move |k| (k == "SQG_AI_API_KEY").then(|| key.clone()))
}

#[test]
fn ai_source_not_requested_is_silent() {
    let (ai, notice) = ai_source(false, config_with_key("gsk_123"));
    assert!(ai.is_none());
    assert_eq!(notice, None);
}

#[test]
fn ai_source_without_key_leaves_a_notice() {
    let (ai, notice) = ai_source(true, AiConfig::from_lookup(|_| None));
    assert!(ai.is_none());
    assert!(notice.unwrap().contains("SQG_AI_API_KEY"));
}

#[test]
fn ai_source_with_unusable_key_falls_back_to_templates() {
    let config = config_with_key("abc\ndef");
    assert!(config.is_available());

    let (ai, notice) = ai_source(true, config);
    assert!(ai.is_none());
    let notice = notice.unwrap();
    assert!(notice.contains("not a valid header value"), "{notice}");
    assert!(notice.contains("modèles"), "{notice}");
}

#[test]
fn ai_source_with_usable_key_builds_the_adapter() {
    let (ai, notice) = ai_source(true, config_with_key("gsk_123"));
    assert!(ai.is_some());
    assert_eq!(notice, None);
}

#[tokio::test]
async fn review_runs_with_unusable_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oral.toml");
    fs::write(
        &path,
        r#"
name = "Oral"
max_grade = 20
preset = "oral"

[[students]]
name = "Inès"
scores = { contenu = 16, expression = 14, posture = 12, temps = 15 }
"#,
    )
    .unwrap();

    let options = ReviewOptions {
        ai: true,
        seed: Some(1),
        json: true,
        ..Default::default()
    };
    run(&path, options, config_with_key("abc\ndef")).await.unwrap();
}

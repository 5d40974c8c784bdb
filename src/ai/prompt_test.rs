use super::*;
use crate::session::{Criterion, ScoreSet};

fn fixture() -> (Vec<Criterion>, ScoreSet) {
    let criteria = vec![
        Criterion::new("fond", "Fond", 5.0, 20.0),
        Criterion::new("forme", "Forme", 2.5, 20.0),
        Criterion::new("ortho", "Orthographe", 1.0, 20.0),
    ];
    let scores = [("fond", 16.0), ("forme", 11.5)].into_iter().collect();
    (criteria, scores)
}

#[test]
fn criterion_level_thresholds() {
    assert_eq!(criterion_level(16.0), "excellent");
    assert_eq!(criterion_level(15.9), "bien");
    assert_eq!(criterion_level(12.0), "bien");
    assert_eq!(criterion_level(8.0), "moyen");
    assert_eq!(criterion_level(7.9), "insuffisant");
}

#[test]
fn lists_every_criterion_with_weight() {
    let (criteria, scores) = fixture();
    let input = FeedbackInput {
        criteria: &criteria,
        scores: &scores,
        note: "",
        final_grade: 13.2,
        scale: 20.0,
    };
    assert_eq!(
        criteria_lines(&input),
        "- Fond: 16/20 (excellent, poids: 5)\n\
         - Forme: 11.5/20 (moyen, poids: 2.5)\n\
         - Orthographe: 0/20 (insuffisant, poids: 1)"
    );
}

#[test]
fn user_prompt_carries_grade_and_band() {
    let (criteria, scores) = fixture();
    let input = FeedbackInput {
        criteria: &criteria,
        scores: &scores,
        note: "",
        final_grade: 6.5,
        scale: 10.0,
    };
    let prompt = user_prompt(&input);
    assert!(prompt.contains("- Note finale : 6.5/10 (Niveau : satisfaisant)"));
    assert!(prompt.contains("- Fond: 16/20"));
    assert!(!prompt.contains("CONSIGNE"));
    assert!(prompt.ends_with("exigeant sur les points faibles."));
}

#[test]
fn teacher_note_is_quoted() {
    let (criteria, scores) = fixture();
    let input = FeedbackInput {
        criteria: &criteria,
        scores: &scores,
        note: "  parler plus fort ",
        final_grade: 12.0,
        scale: 20.0,
    };
    assert!(user_prompt(&input).contains(
        "CONSIGNE SPÉCIFIQUE DU PROFESSEUR (à intégrer absolument) : \"parler plus fort\""
    ));
}

#[test]
fn system_prompt_asks_for_complete_sentences() {
    assert!(SYSTEM_PROMPT.contains("60 à 100 mots"));
    assert!(SYSTEM_PROMPT.contains("Termine TOUJOURS ta dernière phrase."));
}

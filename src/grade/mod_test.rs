use super::*;
use crate::session::StudentRecord;

fn criterion(id: &str, weight: f64) -> Criterion {
    Criterion::new(id, id, weight, 20.0)
}

fn scores(pairs: &[(&str, f64)]) -> ScoreSet {
    pairs.iter().map(|&(k, v)| (k, v)).collect()
}

#[test]
fn empty_criteria_yield_zero() {
    assert_eq!(compute_grade(&[], &ScoreSet::new(), 20.0), 0.0);
}

#[test]
fn missing_scores_yield_zero() {
    let criteria = vec![criterion("fond", 3.0), criterion("forme", 2.0)];
    assert_eq!(compute_grade(&criteria, &ScoreSet::new(), 20.0), 0.0);
}

#[test]
fn single_criterion_weight_cancels_out() {
    for weight in [0.5, 1.0, 7.0, 100.0] {
        let criteria = vec![criterion("fond", weight)];
        let grade = compute_grade(&criteria, &scores(&[("fond", 13.0)]), 10.0);
        assert_eq!(grade, 6.5, "weight {weight}");
    }
}

#[test]
fn equal_weights_average() {
    let criteria = vec![criterion("a", 1.0), criterion("b", 1.0)];
    let grade = compute_grade(&criteria, &scores(&[("a", 20.0), ("b", 0.0)]), 20.0);
    assert_eq!(grade, 10.0);
}

#[test]
fn weights_are_relative() {
    let criteria = vec![criterion("a", 3.0), criterion("b", 1.0)];
    // (20*3 + 0*1) / 4 = 15
    let grade = compute_grade(&criteria, &scores(&[("a", 20.0), ("b", 0.0)]), 20.0);
    assert_eq!(grade, 15.0);
}

#[test]
fn target_scale_rescales() {
    let criteria = vec![criterion("a", 1.0)];
    assert_eq!(compute_grade(&criteria, &scores(&[("a", 15.0)]), 100.0), 75.0);
}

#[test]
fn rounds_to_one_decimal() {
    let criteria = vec![criterion("a", 1.0), criterion("b", 2.0)];
    // (17*1 + 11*2) / 3 = 13.0 / 20 -> 13.0
    let grade = compute_grade(&criteria, &scores(&[("a", 17.0), ("b", 11.0)]), 20.0);
    assert_eq!(grade, 13.0);
    // (17*1 + 12*2) / 3 = 13.666… -> 13.7
    let grade = compute_grade(&criteria, &scores(&[("a", 17.0), ("b", 12.0)]), 20.0);
    assert_eq!(grade, 13.7);
}

#[test]
fn round_tenth_half_away_from_zero() {
    assert_eq!(round_tenth(2.25), 2.3);
    assert_eq!(round_tenth(-2.25), -2.3);
    assert_eq!(round_tenth(7.04), 7.0);
}

#[test]
fn invalid_scale_yields_zero() {
    let criteria = vec![criterion("a", 1.0)];
    let s = scores(&[("a", 20.0)]);
    assert_eq!(compute_grade(&criteria, &s, 0.0), 0.0);
    assert_eq!(compute_grade(&criteria, &s, -20.0), 0.0);
    assert_eq!(compute_grade(&criteria, &s, f64::NAN), 0.0);
}

#[test]
fn zero_weight_criterion_has_no_influence() {
    let criteria = vec![criterion("a", 1.0), criterion("ignored", 0.0)];
    let grade = compute_grade(
        &criteria,
        &scores(&[("a", 16.0), ("ignored", 0.0)]),
        20.0,
    );
    assert_eq!(grade, 16.0);
}

#[test]
fn all_zero_weights_yield_zero() {
    let criteria = vec![criterion("a", 0.0), criterion("b", 0.0)];
    let grade = compute_grade(&criteria, &scores(&[("a", 20.0), ("b", 20.0)]), 20.0);
    assert_eq!(grade, 0.0);
}

#[test]
fn unknown_score_ids_are_ignored() {
    let criteria = vec![criterion("a", 1.0)];
    let grade = compute_grade(&criteria, &scores(&[("a", 10.0), ("zzz", 20.0)]), 20.0);
    assert_eq!(grade, 10.0);
}

#[test]
fn raising_a_score_never_lowers_the_grade() {
    let criteria = vec![
        criterion("a", 3.0),
        criterion("b", 5.0),
        criterion("c", 2.0),
    ];
    let mut previous = f64::MIN;
    for step in 0..=20 {
        let s = scores(&[("a", 11.0), ("b", step as f64), ("c", 7.0)]);
        let grade = compute_grade(&criteria, &s, 20.0);
        assert!(grade >= previous, "step {step}: {grade} < {previous}");
        previous = grade;
    }
}

#[test]
fn compute_grade_is_pure() {
    let criteria = vec![criterion("a", 2.0), criterion("b", 3.0)];
    let s = scores(&[("a", 9.0), ("b", 14.0)]);
    let first = compute_grade(&criteria, &s, 20.0);
    for _ in 0..10 {
        assert_eq!(compute_grade(&criteria, &s, 20.0), first);
    }
}

#[test]
fn end_to_end_single_criterion() {
    let criteria = vec![Criterion::new("fond", "Fond", 5.0, 20.0)];
    let s = scores(&[("fond", 18.0)]);
    let grade = compute_grade(&criteria, &s, 20.0);
    assert_eq!(grade, 18.0);
    assert_eq!(Band::classify(grade), Band::Excellent);
    assert_eq!(check_coherence(&s, grade, 20.0), None);
}

#[test]
fn grade_session_applies_override_and_flags() {
    let session = Session {
        name: "Test".into(),
        max_grade: 20.0,
        preset: None,
        criteria: vec![criterion("a", 1.0), criterion("b", 1.0)],
        students: vec![
            StudentRecord {
                name: "Alice".into(),
                scores: scores(&[("a", 20.0), ("b", 20.0)]),
                grade_override: Some(5.0),
                ..Default::default()
            },
            StudentRecord {
                name: "Bruno".into(),
                scores: scores(&[("a", 12.0), ("b", 14.0)]),
                ..Default::default()
            },
        ],
        created_at: None,
    };

    let graded = grade_session(&session);
    assert_eq!(graded.len(), 2);

    assert_eq!(graded[0].computed, 20.0);
    assert_eq!(graded[0].final_grade, 5.0);
    assert!(graded[0].overridden);
    assert_eq!(graded[0].band, Band::Below);
    assert_eq!(graded[0].warning, Some(CoherenceWarning::ScoresAboveGrade));

    assert_eq!(graded[1].final_grade, 13.0);
    assert_eq!(graded[1].band, Band::Good);
    assert_eq!(graded[1].warning, None);
}

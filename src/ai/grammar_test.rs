use super::*;

#[test]
fn rewrites_ta_before_vowel_noun() {
    assert_eq!(
        fix_grammar("Soigne ta introduction."),
        "Soigne ton introduction."
    );
}

#[test]
fn unflagged_text_is_unchanged() {
    let text = "Ta conclusion est claire, et ta méthode progresse.";
    assert_eq!(fix_grammar(text), text);
}

#[test]
fn all_three_determiners_fixed_for_shared_nouns() {
    assert_eq!(
        fix_grammar("ma analyse, ta analyse, sa analyse"),
        "mon analyse, ton analyse, son analyse"
    );
    assert_eq!(fix_grammar("sa évaluation"), "son évaluation");
}

#[test]
fn ta_only_nouns_leave_ma_and_sa_alone() {
    assert_eq!(fix_grammar("ta erreur"), "ton erreur");
    assert_eq!(fix_grammar("ma erreur"), "ma erreur");
}

#[test]
fn matching_ignores_case_and_keeps_capital() {
    assert_eq!(
        fix_grammar("Ta argumentation tient. TA orthographe aussi."),
        "Ton argumentation tient. Ton orthographe aussi."
    );
}

#[test]
fn word_boundaries_are_respected() {
    // "dicta analyse" must not turn into "dicton analyse"
    assert_eq!(fix_grammar("dicta analyse"), "dicta analyse");
    assert_eq!(fix_grammar("ta analyses"), "ta analyses");
}

#[test]
fn every_occurrence_is_fixed() {
    assert_eq!(
        fix_grammar("ta idée puis ta idée"),
        "ton idée puis ton idée"
    );
}

use super::*;

#[test]
fn dissertation_has_five_criteria() {
    let criteria = Preset::Dissertation.criteria(20.0);
    assert_eq!(criteria.len(), 5);
    assert_eq!(criteria[1].id, "fond");
    assert_eq!(criteria[1].weight, 5.0);
}

#[test]
fn criteria_take_session_scale() {
    let criteria = Preset::Oral.criteria(10.0);
    assert!(criteria.iter().all(|c| c.max_score == 10.0));
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("Exercice".parse::<Preset>().unwrap(), Preset::Exercice);
    assert_eq!(" oral ".parse::<Preset>().unwrap(), Preset::Oral);
}

#[test]
fn parse_unknown_fails() {
    let err = "custom".parse::<Preset>().unwrap_err();
    assert!(matches!(err, SessionError::UnknownPreset(name) if name == "custom"));
}

#[test]
fn display_round_trips_through_parse() {
    for preset in Preset::ALL {
        assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
    }
}

#[test]
fn criterion_ids_are_unique_per_preset() {
    for preset in Preset::ALL {
        let criteria = preset.criteria(20.0);
        let mut ids: Vec<_> = criteria.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), criteria.len(), "{preset} has duplicate ids");
    }
}

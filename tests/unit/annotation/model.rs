use super::*;

#[test]
fn kind_parses_known_names_and_falls_back_to_unknown() {
    assert_eq!(AnnotationKind::parse("underline"), AnnotationKind::Underline);
    assert_eq!(
        AnnotationKind::parse(" Strike-Through "),
        AnnotationKind::StrikeThrough
    );
    assert_eq!(
        AnnotationKind::parse("crossed-off"),
        AnnotationKind::CrossedOff
    );
    assert_eq!(AnnotationKind::parse("bracket"), AnnotationKind::Unknown);
    for kind in AnnotationKind::ALL {
        assert_eq!(AnnotationKind::parse(kind.as_str()), kind);
    }
}

#[test]
fn config_json_uses_camel_case_fields() {
    let cfg = AnnotationConfig::from_json(
        r##"{
            "type": "highlight",
            "color": "#fff176",
            "strokeWidth": 3,
            "padding": [2, 4],
            "animate": false,
            "animationDuration": 1200,
            "iterations": 1
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.kind, AnnotationKind::Highlight);
    assert_eq!(cfg.effective_color(), "#fff176");
    assert_eq!(cfg.effective_stroke_width(), 3.0);
    assert_eq!(cfg.padding, Some(Padding::Sides(vec![2.0, 4.0])));
    assert!(!cfg.animates());
    assert_eq!(cfg.total_duration_ms(), 1200.0);
    assert_eq!(cfg.effective_iterations(), 1);
}

#[test]
fn defaults_apply_when_fields_are_absent() {
    let cfg = AnnotationConfig::from_json(r#"{ "type": "box" }"#).unwrap();
    assert_eq!(cfg.effective_color(), DEFAULT_COLOR);
    assert_eq!(cfg.effective_stroke_width(), DEFAULT_STROKE_WIDTH);
    assert!(cfg.animates());
    assert_eq!(cfg.total_duration_ms(), DEFAULT_ANIMATION_DURATION_MS);
    assert_eq!(cfg.effective_iterations(), DEFAULT_ITERATIONS);
    assert_eq!(cfg.padding, None);
}

#[test]
fn zero_stroke_width_falls_back_but_zero_duration_is_kept() {
    let cfg = AnnotationConfig::new(AnnotationKind::Underline)
        .with_stroke_width(0.0)
        .with_animation_duration(0.0)
        .with_iterations(0);
    assert_eq!(cfg.effective_stroke_width(), DEFAULT_STROKE_WIDTH);
    assert_eq!(cfg.total_duration_ms(), 0.0);
    assert_eq!(cfg.effective_iterations(), 0);
}

#[test]
fn unknown_kind_still_deserializes() {
    let cfg = AnnotationConfig::from_json(r#"{ "type": "bracket" }"#).unwrap();
    assert_eq!(cfg.kind, AnnotationKind::Unknown);
}

#[test]
fn scalar_padding_deserializes_as_uniform() {
    let cfg = AnnotationConfig::from_json(r#"{ "type": "box", "padding": 0 }"#).unwrap();
    assert_eq!(cfg.padding, Some(Padding::Uniform(0.0)));
}

#[test]
fn serialization_omits_unset_fields() {
    let cfg = AnnotationConfig::new(AnnotationKind::CrossedOff).with_color("red");
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(json, r#"{"type":"crossed-off","color":"red"}"#);
}

#[test]
fn validate_rejects_bad_values() {
    let base = AnnotationConfig::new(AnnotationKind::Box);
    assert!(base.validate().is_ok());
    assert!(
        base.clone()
            .with_animation_duration(-1.0)
            .validate()
            .is_err()
    );
    assert!(
        base.clone()
            .with_stroke_width(f64::INFINITY)
            .validate()
            .is_err()
    );
    assert!(
        base.clone()
            .with_padding(vec![1.0, f64::NAN])
            .validate()
            .is_err()
    );
    assert!(base.with_color("  ").validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = AnnotationConfig::from_json("{").unwrap_err();
    assert!(matches!(err, RoughError::Serde(_)));
}

use super::*;
use crate::annotation::model::AnnotationKind;

const SCENE: &str = r#"{
    "width": 320,
    "height": 120,
    "seed": 9,
    "annotations": [
        { "rect": { "x": 10, "y": 10, "w": 100, "h": 20 }, "config": { "type": "underline" } },
        { "rect": { "x": 10, "y": 60, "w": 80, "h": 30 }, "config": { "type": "circle", "iterations": 3 }, "seed": 77 }
    ]
}"#;

#[test]
fn parses_annotations_in_order() {
    let scene = Scene::from_json(SCENE).unwrap();
    assert_eq!(scene.width, 320.0);
    assert_eq!(scene.seed, 9);
    assert_eq!(scene.annotations.len(), 2);
    assert_eq!(scene.annotations[0].config.kind, AnnotationKind::Underline);
    assert_eq!(scene.annotations[0].seed, None);
    assert_eq!(scene.annotations[1].rect, Rect::new(10.0, 60.0, 80.0, 30.0));
    assert_eq!(scene.annotations[1].seed, Some(77));
}

#[test]
fn validation_reports_annotation_index() {
    let json = SCENE.replace(r#""iterations": 3"#, r#""animationDuration": -5"#);
    let err = Scene::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("annotation 1"));
}

#[test]
fn zero_sized_scene_is_rejected() {
    let json = SCENE.replace(r#""width": 320"#, r#""width": 0"#);
    assert!(matches!(
        Scene::from_json(&json),
        Err(RoughError::Validation(_))
    ));
}

#[test]
fn missing_file_is_reported() {
    let err = Scene::from_path("target/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("read scene"));
}

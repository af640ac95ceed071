use super::*;

#[test]
fn highlight_is_rougher_than_single_and_double() {
    let single = resolve_style(StrokeClass::Single, 1);
    let double = resolve_style(StrokeClass::Double, 1);
    let highlight = resolve_style(StrokeClass::Highlight, 1);
    assert_eq!(single.roughness, double.roughness);
    assert!(highlight.roughness > single.roughness);
}

#[test]
fn only_double_enables_multi_stroke() {
    assert!(resolve_style(StrokeClass::Single, 0).disable_multi_stroke);
    assert!(!resolve_style(StrokeClass::Double, 0).disable_multi_stroke);
    assert!(resolve_style(StrokeClass::Highlight, 0).disable_multi_stroke);
}

#[test]
fn seed_is_the_only_varying_field() {
    let a = resolve_style(StrokeClass::Single, 3);
    let b = resolve_style(StrokeClass::Single, 991);
    assert_eq!(a.seed, 3);
    assert_eq!(b.seed, 991);
    assert_eq!(SketchStyle { seed: 3, ..b }, a);
}

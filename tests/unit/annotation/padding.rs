use super::*;

#[test]
fn absent_padding_uses_default() {
    assert_eq!(normalize_padding(None), DEFAULT_PADDING);
    assert_eq!(DEFAULT_PADDING, [5.0; 4]);
}

#[test]
fn scalar_replicates_including_zero_and_negative() {
    assert_eq!(normalize_padding(Some(&Padding::Uniform(0.0))), [0.0; 4]);
    assert_eq!(normalize_padding(Some(&Padding::Uniform(7.5))), [7.5; 4]);
    assert_eq!(normalize_padding(Some(&Padding::Uniform(-3.0))), [-3.0; 4]);
}

#[test]
fn sequences_follow_css_shorthand() {
    let p = |v: &[f64]| normalize_padding(Some(&Padding::Sides(v.to_vec())));
    assert_eq!(p(&[4.0]), [4.0, 4.0, 4.0, 4.0]);
    assert_eq!(p(&[1.0, 2.0]), [1.0, 2.0, 1.0, 2.0]);
    assert_eq!(p(&[1.0, 2.0, 3.0]), [1.0, 2.0, 3.0, 2.0]);
    assert_eq!(p(&[1.0, 2.0, 3.0, 4.0]), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn malformed_sequences_degrade_without_error() {
    let p = |v: &[f64]| normalize_padding(Some(&Padding::Sides(v.to_vec())));
    assert_eq!(p(&[]), DEFAULT_PADDING);
    assert_eq!(p(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn side_indices_match_canonical_order() {
    let full = normalize_padding(Some(&Padding::Sides(vec![1.0, 2.0, 3.0, 4.0])));
    assert_eq!(full[TOP], 1.0);
    assert_eq!(full[RIGHT], 2.0);
    assert_eq!(full[BOTTOM], 3.0);
    assert_eq!(full[LEFT], 4.0);
}

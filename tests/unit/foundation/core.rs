use super::*;

#[test]
fn edges_follow_origin_and_size() {
    let r = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.mid_y(), 40.0);
}

#[test]
fn kurbo_conversion_roundtrips() {
    let r = Rect::new(-5.0, 3.0, 12.0, 8.0);
    let k = r.to_kurbo();
    assert_eq!(k, kurbo::Rect::new(-5.0, 3.0, 7.0, 11.0));
    assert_eq!(Rect::from(k), r);
}

#[test]
fn validate_rejects_nan_and_negative_size() {
    assert!(Rect::new(0.0, 0.0, 10.0, 10.0).validate().is_ok());
    assert!(Rect::new(f64::NAN, 0.0, 10.0, 10.0).validate().is_err());
    assert!(Rect::new(0.0, 0.0, -1.0, 10.0).validate().is_err());
}

use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::Ease,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn ease_out_front_loads_progress() {
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
    assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn css_keywords_and_default() {
    assert_eq!(Ease::default(), Ease::EaseOut);
    assert_eq!(Ease::EaseOut.css_keyword(), "ease-out");
    assert_eq!(
        serde_json::to_string(&Ease::EaseInOut).unwrap(),
        "\"ease-in-out\""
    );
}

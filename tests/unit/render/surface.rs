use super::*;

#[test]
fn shorthand_matches_css_animation_syntax() {
    let dash = DashAnimation {
        length: 120.5,
        plan: AnimationPlan {
            duration_ms: 400.0,
            delay_ms: 0.0,
        },
        easing: Ease::EaseOut,
    };
    assert_eq!(
        dash.css_shorthand(),
        "rough-notation-dash 400ms ease-out 0ms forwards"
    );
}

#[test]
fn fractional_timings_keep_full_precision() {
    let dash = DashAnimation {
        length: 10.0,
        plan: AnimationPlan {
            duration_ms: 266.5,
            delay_ms: 1066.25,
        },
        easing: Ease::EaseOut,
    };
    assert_eq!(
        dash.css_shorthand(),
        "rough-notation-dash 266.5ms ease-out 1066.25ms forwards"
    );
    assert_eq!(dash.dash_offset_at(0.0), 10.0);
    assert_eq!(dash.dash_offset_at(2000.0), 0.0);
}

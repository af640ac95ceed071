use super::*;

#[test]
fn durations_are_proportional_and_sum_to_total() {
    let plans = schedule(&[10.0, 30.0, 60.0], 800.0, 0.0);
    for (plan, expected) in plans.iter().zip([80.0, 240.0, 480.0]) {
        assert!((plan.duration_ms - expected).abs() < 1e-9);
    }

    let lengths = [3.7, 112.25, 0.5, 41.0, 9.99];
    let plans = schedule(&lengths, 1234.5, 0.0);
    let sum: f64 = plans.iter().map(|p| p.duration_ms).sum();
    assert!((sum - 1234.5).abs() < 1e-9);
}

#[test]
fn delays_chain_from_start_delay() {
    let plans = schedule(&[5.0, 15.0, 20.0, 60.0], 1000.0, 250.0);
    assert_eq!(plans[0].delay_ms, 250.0);
    for w in plans.windows(2) {
        assert!((w[1].delay_ms - (w[0].delay_ms + w[0].duration_ms)).abs() < 1e-9);
    }
    assert!((plans.last().unwrap().end_ms() - 1250.0).abs() < 1e-9);
}

#[test]
fn zero_total_length_gives_zero_durations() {
    let plans = schedule(&[0.0, 0.0], 800.0, 40.0);
    assert_eq!(
        plans,
        vec![
            AnimationPlan {
                duration_ms: 0.0,
                delay_ms: 40.0
            };
            2
        ]
    );
}

#[test]
fn empty_input_gives_empty_plan() {
    assert!(schedule(&[], 800.0, 0.0).is_empty());
}

#[test]
fn zero_budget_keeps_sequence_but_no_time() {
    let plans = schedule(&[1.0, 2.0], 0.0, 10.0);
    assert!(plans.iter().all(|p| p.duration_ms == 0.0 && p.delay_ms == 10.0));
}

#[test]
fn dash_offset_sampling_follows_the_reveal() {
    let plan = AnimationPlan {
        duration_ms: 100.0,
        delay_ms: 50.0,
    };
    assert_eq!(plan.dash_offset_at(40.0, 0.0, Ease::EaseOut), 40.0);
    assert_eq!(plan.dash_offset_at(40.0, 150.0, Ease::EaseOut), 0.0);
    assert_eq!(plan.dash_offset_at(40.0, 500.0, Ease::Linear), 0.0);
    assert!((plan.dash_offset_at(40.0, 100.0, Ease::Linear) - 20.0).abs() < 1e-9);
    assert!(plan.dash_offset_at(40.0, 100.0, Ease::EaseOut) < 20.0);

    let instant = AnimationPlan {
        duration_ms: 0.0,
        delay_ms: 10.0,
    };
    assert_eq!(instant.progress_at(5.0, Ease::EaseOut), 0.0);
    assert_eq!(instant.progress_at(10.0, Ease::EaseOut), 1.0);
}

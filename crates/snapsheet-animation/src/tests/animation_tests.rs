use super::*;

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_boundaries_are_exact() {
    for easing in [Easing::Linear, Easing::EaseOutBack] {
        assert_eq!(easing.transform(0.0), 0.0, "start must be exact for {:?}", easing);
        assert_eq!(easing.transform(1.0), 1.0, "end must be exact for {:?}", easing);
    }
}

#[test]
fn ease_out_back_overshoots_before_settling() {
    let peak = Easing::EaseOutBack.transform(0.7);
    assert!(peak > 1.0, "expected overshoot past 1.0, got {}", peak);
    // Settles back under the peak as it approaches the end.
    assert!(Easing::EaseOutBack.transform(0.99) < peak);
}

#[test]
fn ease_out_back_matches_reference_cubic() {
    // 1 + 2.70158*(t-1)^3 + 1.70158*(t-1)^2 evaluated by hand at t = 0.5.
    let expected = 1.0 + 2.70158 * (-0.5f32).powi(3) + 1.70158 * 0.25;
    let actual = Easing::EaseOutBack.transform(0.5);
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn animation_spec_default_is_300ms_ease_out_back() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::EaseOutBack);
}

#[test]
fn run_anchors_start_time_on_first_sample() {
    let mut run = AnimationRun::new(85.0, 50.0, AnimationSpec::default());
    // First observation is progress 0 regardless of the absolute timestamp.
    let (value, finished) = run.sample(1_000_000);
    assert_eq!(value, 85.0);
    assert!(!finished);
}

#[test]
fn run_reports_intermediate_values_and_lands_exactly() {
    let mut run = AnimationRun::new(0.0, 100.0, AnimationSpec::tween(300, Easing::Linear));
    run.sample(0);

    let (mid, finished) = run.sample(150);
    assert!(!finished);
    assert!((mid - 50.0).abs() < 1e-4, "expected ~50, got {}", mid);

    let (end, finished) = run.sample(300);
    assert!(finished);
    assert_eq!(end, 100.0, "run must land exactly on the target");
}

#[test]
fn run_overshoots_target_mid_flight() {
    let mut run = AnimationRun::new(0.0, 100.0, AnimationSpec::default());
    run.sample(0);
    let (value, finished) = run.sample(210); // t = 0.7, past the overshoot knee
    assert!(!finished);
    assert!(value > 100.0, "ease-out-back should exceed the target, got {}", value);

    let (end, finished) = run.sample(300);
    assert!(finished);
    assert_eq!(end, 100.0);
}

#[test]
fn clock_regression_clamps_progress_to_zero() {
    let mut run = AnimationRun::new(10.0, 50.0, AnimationSpec::default());
    run.sample(1_000);
    let (value, finished) = run.sample(400);
    assert_eq!(value, 10.0);
    assert!(!finished);
}

#[test]
fn samples_past_the_duration_stay_finished_at_target() {
    let mut run = AnimationRun::new(10.0, 50.0, AnimationSpec::default());
    run.sample(0);
    let (_, finished) = run.sample(300);
    assert!(finished);
    let (value, finished) = run.sample(10_000);
    assert_eq!(value, 50.0);
    assert!(finished);
}

#[test]
fn lerp_interpolates_endpoints_exactly() {
    assert_eq!(0.0f32.lerp(&10.0, 0.0), 0.0);
    assert_eq!(0.0f32.lerp(&10.0, 1.0), 10.0);
    assert_eq!(0.0f64.lerp(&10.0, 0.5), 5.0);
}

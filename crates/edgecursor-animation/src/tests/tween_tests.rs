use super::*;

const MILLIS: u64 = 1_000_000;

#[test]
fn ease_out_pins_endpoints_and_leads_linear() {
    assert_eq!(ease_out(0.0), 0.0);
    assert_eq!(ease_out(1.0), 1.0);
    assert_eq!(ease_out(0.5), 0.75);
    assert_eq!(ease_out(-1.0), 0.0);
    assert_eq!(ease_out(2.0), 1.0);
}

#[test]
fn tween_reaches_target_after_duration() {
    let mut tween = Tween::new(20.0);
    tween.animate_to(0.0, 500);

    assert!(tween.on_frame(1_000 * MILLIS));
    assert_eq!(tween.value(), 20.0);

    assert!(tween.on_frame(1_250 * MILLIS));
    assert!((tween.value() - 5.0).abs() < 1e-3);

    assert!(!tween.on_frame(1_500 * MILLIS));
    assert_eq!(tween.value(), 0.0);
    assert!(!tween.is_running());
}

#[test]
fn retargeting_starts_from_current_value() {
    let mut tween = Tween::new(0.0);
    tween.animate_to(1.0, 100);
    tween.on_frame(0);
    tween.on_frame(50 * MILLIS);
    let midway = tween.value();

    tween.animate_to(0.0, 100);
    tween.on_frame(60 * MILLIS);
    assert!((tween.value() - midway).abs() < 1e-6);
    assert!(!tween.on_frame(160 * MILLIS));
    assert_eq!(tween.value(), 0.0);
}

#[test]
fn snap_stops_running_animation() {
    let mut tween = Tween::new(0.0);
    tween.animate_to(1.0, 300);
    tween.snap_to(0.25);
    assert!(!tween.is_running());
    assert!(!tween.on_frame(10 * MILLIS));
    assert_eq!(tween.value(), 0.25);
}

#[test]
fn huge_durations_saturate_instead_of_overflowing() {
    assert_eq!(millis_to_nanos(u64::MAX / 1000), u64::MAX);

    let mut tween = Tween::new(20.0);
    tween.animate_to(0.0, u64::MAX / 1000);
    assert!(tween.on_frame(0));
    assert!(tween.on_frame(16 * MILLIS));
    assert!(tween.is_running());
    assert!(tween.value() <= 20.0);
}

#[test]
fn zero_duration_finishes_on_first_frame() {
    let mut tween = Tween::new(0.0);
    tween.animate_to(1.0, 0);
    assert!(!tween.on_frame(5 * MILLIS));
    assert_eq!(tween.value(), 1.0);
}

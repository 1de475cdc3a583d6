use super::*;

#[test]
fn classify_splits_viewport_into_quarters() {
    let width = 1000.0;
    assert_eq!(classify(0.0, width), Zone::Left);
    assert_eq!(classify(249.9, width), Zone::Left);
    assert_eq!(classify(500.0, width), Zone::Center);
    assert_eq!(classify(750.1, width), Zone::Right);
    assert_eq!(classify(1000.0, width), Zone::Right);
}

#[test]
fn thresholds_belong_to_center() {
    assert_eq!(classify(250.0, 1000.0), Zone::Center);
    assert_eq!(classify(750.0, 1000.0), Zone::Center);
}

#[test]
fn out_of_range_coordinates_classify_normally() {
    assert_eq!(classify(-40.0, 800.0), Zone::Left);
    assert_eq!(classify(1200.0, 800.0), Zone::Right);
}

#[test]
fn nan_coordinate_lands_in_center() {
    assert_eq!(classify(f32::NAN, 800.0), Zone::Center);
}

#[test]
fn every_sample_matches_threshold_rule() {
    let width = 1280.0;
    for step in 0..=1280 {
        let x = step as f32;
        let expected = if x < width * 0.25 {
            Zone::Left
        } else if x > width * 0.75 {
            Zone::Right
        } else {
            Zone::Center
        };
        assert_eq!(classify(x, width), expected, "x = {x}");
    }
}

#[test]
fn custom_fraction_moves_thresholds() {
    let classifier = ZoneClassifier::new(0.1);
    assert_eq!(classifier.classify(99.0, 1000.0), Zone::Left);
    assert_eq!(classifier.classify(100.0, 1000.0), Zone::Center);
    assert_eq!(classifier.classify(901.0, 1000.0), Zone::Right);
}

#[test]
fn fraction_is_clamped_and_sanitized() {
    assert_eq!(ZoneClassifier::new(0.9).edge_fraction(), 0.5);
    assert_eq!(ZoneClassifier::new(-1.0).edge_fraction(), 0.0);
    assert_eq!(
        ZoneClassifier::new(f32::INFINITY).edge_fraction(),
        DEFAULT_EDGE_FRACTION
    );

    let no_edges = ZoneClassifier::new(0.0);
    assert_eq!(no_edges.classify(0.0, 1000.0), Zone::Center);
    assert_eq!(no_edges.classify(1000.0, 1000.0), Zone::Center);
}

#[test]
fn sides_map_to_zones() {
    assert_eq!(Zone::Left.side(), Some(Side::Left));
    assert_eq!(Zone::Center.side(), None);
    assert_eq!(Side::Right.zone(), Zone::Right);
    assert_eq!(Side::Left.opposite(), Side::Right);
}

use super::*;

#[test]
fn transforms_format_css() {
    assert_eq!(
        pointer_transform(Point::new(12.5, 40.0)),
        "translate3d(12.5px, 40px, 0) translate(-50%, -50%)"
    );
    assert_eq!(inner_transform(0.75), "translate(-50%, -50%) scale(0.75)");
    assert_eq!(arrow_transform(-20.0), "translateX(-20px)");
}

#[test]
fn native_cursor_is_hidden_only_while_indicator_shows() {
    assert_eq!(native_cursor(true), "none");
    assert_eq!(native_cursor(false), "default");
}

#[test]
fn frame_timestamps_convert_to_nanos() {
    assert_eq!(frame_time_nanos(16.5), 16_500_000);
    assert_eq!(frame_time_nanos(0.0), 0);
    assert_eq!(frame_time_nanos(-3.0), 0);
    assert_eq!(frame_time_nanos(f64::NAN), 0);
}

#[test]
fn default_ids_are_distinct() {
    let ids = CursorElementIds::default();
    let all = [&ids.pointer, &ids.inner, &ids.arrow_left, &ids.arrow_right];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

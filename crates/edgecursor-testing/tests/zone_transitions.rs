use edgecursor_core::{AnimationIntent, Side, Zone};
use edgecursor_testing::prelude::*;

#[test]
fn left_center_right_sweep_emits_three_intents() {
    let mut robot = CursorRobot::new(1000.0);
    for x in [10.0, 10.0, 500.0, 900.0] {
        assert!(robot.move_to(x, 100.0));
    }

    assert_eq!(
        robot.intents(),
        vec![
            AnimationIntent::enter(Side::Left, 20.0),
            AnimationIntent::exit(Side::Left, 20.0),
            AnimationIntent::enter(Side::Right, 20.0),
        ]
    );
}

#[test]
fn high_frequency_moves_in_one_zone_emit_once() {
    let mut robot = CursorRobot::new(1000.0);
    for step in 0..200 {
        robot.move_to(800.0 + step as f32, 50.0);
    }
    assert_eq!(robot.intents().len(), 1);
    assert_eq!(robot.host().width_queries(), 200);
}

#[test]
fn edge_jump_after_resize_cancels_left_before_right_plays() {
    let mut robot = CursorRobot::new(1000.0);
    robot.move_to(100.0, 0.0);
    robot.recorder().clear();

    robot.resize(120.0);
    robot.move_to(100.0, 0.0);

    assert_eq!(
        robot.recorder().arrow_calls(),
        vec![
            PlayerCall::Cancel(Side::Left),
            PlayerCall::Play(AnimationIntent::enter(Side::Right, 20.0)),
        ]
    );
    assert_eq!(robot.zone_state().map(|state| state.current), Some(Zone::Right));
}

#[test]
fn arrow_frames_follow_intents_over_time() {
    let mut robot = CursorRobot::new(1000.0);
    robot.move_to(950.0, 0.0);
    robot.advance_millis(500);
    let frame = robot.frame();
    assert_eq!(frame.right.opacity, 1.0);
    assert_eq!(frame.right.offset, 0.0);
    assert_eq!(frame.left.opacity, 0.0);

    robot.move_to(500.0, 0.0);
    robot.advance_millis(500);
    let frame = robot.frame();
    assert_eq!(frame.right.opacity, 0.0);
    assert_eq!(frame.right.offset, -20.0);
}

#[test]
fn entering_left_hides_right_arrow_mid_exit() {
    let mut robot = CursorRobot::new(1000.0);
    robot.move_to(950.0, 0.0);
    robot.advance_millis(500);
    robot.move_to(500.0, 0.0);
    robot.advance_millis(50);
    assert!(robot.frame().right.opacity > 0.0);

    robot.move_to(10.0, 0.0);
    assert_eq!(robot.frame().right.opacity, 0.0);
}

#[test]
fn pointer_position_follows_every_move() {
    let mut robot = CursorRobot::new(1000.0);
    robot.move_to(420.0, 42.0);
    assert_eq!(robot.frame().position.x, 420.0);
    assert_eq!(robot.frame().position.y, 42.0);
}

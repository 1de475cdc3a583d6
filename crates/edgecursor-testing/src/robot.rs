//! Robot-style harness for end-to-end cursor scenarios.
//!
//! The robot activates a tracker against a [`FakeHost`], records every player
//! call and also drives a [`CursorAnimator`] so tests can check the rendered
//! frame after advancing time.
//!
//! # Example
//!
//! ```
//! use edgecursor_testing::CursorRobot;
//!
//! let mut robot = CursorRobot::new(1000.0);
//! robot.move_to(10.0, 300.0);
//! robot.advance_millis(500);
//! assert_eq!(robot.frame().left.opacity, 1.0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use edgecursor_animation::{millis_to_nanos, CursorAnimator, CursorFrame};
use edgecursor_core::{AnimationIntent, CursorPlayer, CursorSettings, Point, Side, ZoneState};
use edgecursor_foundation::{activate, CursorHandle, HostSignal, InactiveReason};

use crate::host::{FakeHost, FakeSubscription, FakeTarget};
use crate::player::{PlayerCall, RecordingPlayer};

const FRAME_NANOS: u64 = 16_000_000;

/// Forwards every call to both the recorder and the animator.
pub struct RobotPlayer {
    recorder: RecordingPlayer,
    animator: Rc<RefCell<CursorAnimator>>,
}

impl CursorPlayer for RobotPlayer {
    fn play(&mut self, intent: AnimationIntent) {
        self.recorder.play(intent);
        self.animator.borrow_mut().play(intent);
    }

    fn cancel(&mut self, side: Side) {
        self.recorder.cancel(side);
        self.animator.borrow_mut().cancel(side);
    }

    fn set_visible(&mut self, visible: bool) {
        self.recorder.set_visible(visible);
        self.animator.borrow_mut().set_visible(visible);
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.recorder.set_pressed(pressed);
        self.animator.borrow_mut().set_pressed(pressed);
    }

    fn move_to(&mut self, position: Point) {
        self.recorder.move_to(position);
        self.animator.borrow_mut().move_to(position);
    }
}

pub struct CursorRobot {
    host: Rc<FakeHost>,
    recorder: RecordingPlayer,
    animator: Rc<RefCell<CursorAnimator>>,
    handle: Option<CursorHandle<FakeSubscription, RobotPlayer>>,
    now_nanos: u64,
}

impl CursorRobot {
    /// Activate against a mouse host of the given viewport width.
    pub fn new(width: f32) -> Self {
        Self::with_host(FakeHost::new(width), CursorSettings::default())
    }

    pub fn with_host(host: FakeHost, settings: CursorSettings) -> Self {
        let host = Rc::new(host);
        let recorder = RecordingPlayer::new();
        let animator = Rc::new(RefCell::new(CursorAnimator::new(&settings)));
        let player = RobotPlayer {
            recorder: recorder.clone(),
            animator: Rc::clone(&animator),
        };
        let handle = activate(Rc::clone(&host), player, &settings);
        Self {
            host,
            recorder,
            animator,
            handle: Some(handle),
            now_nanos: 0,
        }
    }

    pub fn host(&self) -> &FakeHost {
        &self.host
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| handle.is_active())
    }

    pub fn inactive_reason(&self) -> Option<InactiveReason> {
        self.handle
            .as_ref()
            .and_then(|handle| handle.inactive_reason().cloned())
    }

    /// Move over the page. Returns whether a listener received the signal.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.host.emit(HostSignal::Move {
            client_x: x,
            client_y: y,
            target: FakeTarget::Page,
        })
    }

    /// Move over an embedded frame.
    pub fn move_over_frame(&mut self, x: f32, y: f32) -> bool {
        self.host.emit(HostSignal::Move {
            client_x: x,
            client_y: y,
            target: FakeTarget::Frame,
        })
    }

    pub fn press(&mut self) -> bool {
        self.host.emit(HostSignal::Down)
    }

    pub fn release(&mut self) -> bool {
        self.host.emit(HostSignal::Up)
    }

    pub fn enter(&mut self) -> bool {
        self.host.emit(HostSignal::Enter)
    }

    pub fn leave(&mut self) -> bool {
        self.host.emit(HostSignal::Leave)
    }

    /// Simulates a window resize; the next move reads the new width.
    pub fn resize(&mut self, width: f32) {
        self.host.set_width(width);
    }

    /// Advance the animator clock by `millis`, one 16ms frame at a time.
    pub fn advance_millis(&mut self, millis: u64) {
        let end = self.now_nanos.saturating_add(millis_to_nanos(millis));
        let mut animator = self.animator.borrow_mut();
        animator.advance(self.now_nanos);
        while self.now_nanos < end {
            self.now_nanos = self.now_nanos.saturating_add(FRAME_NANOS).min(end);
            animator.advance(self.now_nanos);
        }
    }

    pub fn frame(&self) -> CursorFrame {
        self.animator.borrow().frame()
    }

    pub fn calls(&self) -> Vec<PlayerCall> {
        self.recorder.calls()
    }

    pub fn intents(&self) -> Vec<AnimationIntent> {
        self.recorder.intents()
    }

    pub fn recorder(&self) -> &RecordingPlayer {
        &self.recorder
    }

    pub fn visible(&self) -> Option<bool> {
        self.handle
            .as_ref()
            .and_then(|handle| handle.with_tracker(|tracker| tracker.visible()))
    }

    pub fn zone_state(&self) -> Option<ZoneState> {
        self.handle
            .as_ref()
            .and_then(|handle| handle.with_tracker(|tracker| tracker.zone_state()))
    }

    /// Unmount: release the host subscription.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.deactivate();
        }
    }
}

//! Player that records every call for later assertions.

use std::cell::RefCell;
use std::rc::Rc;

use edgecursor_core::{AnimationIntent, CursorPlayer, Point, Side};

#[derive(Clone, Debug, PartialEq)]
pub enum PlayerCall {
    Play(AnimationIntent),
    Cancel(Side),
    Visible(bool),
    Pressed(bool),
    Move(Point),
}

/// Cloneable recorder; clones share one call log.
#[derive(Clone, Default)]
pub struct RecordingPlayer {
    calls: Rc<RefCell<Vec<PlayerCall>>>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PlayerCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn intents(&self) -> Vec<AnimationIntent> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                PlayerCall::Play(intent) => Some(*intent),
                _ => None,
            })
            .collect()
    }

    /// Calls that affect arrows: plays and cancels, in order.
    pub fn arrow_calls(&self) -> Vec<PlayerCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, PlayerCall::Play(_) | PlayerCall::Cancel(_)))
            .cloned()
            .collect()
    }

    /// Most recent visibility notification.
    pub fn last_visible(&self) -> Option<bool> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            PlayerCall::Visible(visible) => Some(*visible),
            _ => None,
        })
    }

    fn record(&self, call: PlayerCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl CursorPlayer for RecordingPlayer {
    fn play(&mut self, intent: AnimationIntent) {
        self.record(PlayerCall::Play(intent));
    }

    fn cancel(&mut self, side: Side) {
        self.record(PlayerCall::Cancel(side));
    }

    fn set_visible(&mut self, visible: bool) {
        self.record(PlayerCall::Visible(visible));
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.record(PlayerCall::Pressed(pressed));
    }

    fn move_to(&mut self, position: Point) {
        self.record(PlayerCall::Move(position));
    }
}

//! Zone transition state machine.
//!
//! Decides when the directional arrows appear, which direction they animate
//! from, and which in-flight arrow must be suppressed. Rendering is left to a
//! [`CursorPlayer`](crate::CursorPlayer).

use crate::settings::{CursorSettings, ARROW_TRAVEL};
use crate::zone::{Side, Zone, ZoneClassifier};

/// Requested directional transition for one arrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationIntent {
    pub side: Side,
    pub from_offset: f32,
    pub to_offset: f32,
    /// Either `0.0` (fade out) or `1.0` (fade in).
    pub to_opacity: f32,
    /// Arrow that must be hidden before this intent plays.
    pub cancels: Option<Side>,
}

impl AnimationIntent {
    /// Arrow slides in from its hidden offset and fades in.
    pub fn enter(side: Side, travel: f32) -> Self {
        Self {
            side,
            from_offset: side.travel_sign() * travel,
            to_offset: 0.0,
            to_opacity: 1.0,
            cancels: Some(side.opposite()),
        }
    }

    /// Arrow slides back out to its hidden offset and fades out.
    pub fn exit(side: Side, travel: f32) -> Self {
        Self {
            side,
            from_offset: 0.0,
            to_offset: side.travel_sign() * travel,
            to_opacity: 0.0,
            cancels: None,
        }
    }

    pub fn is_entry(&self) -> bool {
        self.to_opacity > 0.5
    }
}

/// Persistent memory of the state machine.
///
/// `previous` holds the last edge side vacated, so it can never be the center
/// once set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoneState {
    pub current: Zone,
    pub previous: Option<Side>,
}

impl ZoneState {
    /// The previously vacated edge as a zone, [`Zone::Center`] until one has been left.
    pub fn previous_zone(&self) -> Zone {
        self.previous.map(Side::zone).unwrap_or(Zone::Center)
    }
}

#[derive(Clone, Debug)]
pub struct ZoneStateMachine {
    classifier: ZoneClassifier,
    travel: f32,
    state: ZoneState,
}

impl ZoneStateMachine {
    pub fn new() -> Self {
        Self {
            classifier: ZoneClassifier::default(),
            travel: ARROW_TRAVEL,
            state: ZoneState::default(),
        }
    }

    pub fn with_settings(settings: &CursorSettings) -> Self {
        Self {
            classifier: ZoneClassifier::new(settings.edge_fraction),
            travel: settings.arrow_travel,
            state: ZoneState::default(),
        }
    }

    pub fn state(&self) -> ZoneState {
        self.state
    }

    pub fn current(&self) -> Zone {
        self.state.current
    }

    pub fn previous(&self) -> Zone {
        self.state.previous_zone()
    }

    /// Feed one horizontal sample. Returns at most one intent.
    ///
    /// Samples that stay in the current zone are no-ops. A direct jump between
    /// the two edges (possible only when the viewport width changes between
    /// samples) resolves as an entry into the new edge, which cancels the
    /// vacated arrow.
    pub fn update(&mut self, x: f32, viewport_width: f32) -> Option<AnimationIntent> {
        let zone = self.classifier.classify(x, viewport_width);
        if zone == self.state.current {
            return None;
        }

        let vacated = self.state.current.side();
        if let Some(side) = vacated {
            self.state.previous = Some(side);
        }
        log::trace!(
            "cursor zone {:?} -> {:?} (x={}, width={})",
            self.state.current,
            zone,
            x,
            viewport_width
        );
        self.state.current = zone;

        match zone.side() {
            Some(side) => Some(AnimationIntent::enter(side, self.travel)),
            // Only reachable from an edge, so `vacated` is always set here.
            None => vacated.map(|side| AnimationIntent::exit(side, self.travel)),
        }
    }
}

impl Default for ZoneStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/state_machine_tests.rs"]
mod tests;

//! Core decision logic for the edgecursor pointer indicator.
//!
//! This crate is pure data and has no knowledge of any host environment:
//! it classifies a horizontal pointer coordinate into a [`Zone`], tracks zone
//! transitions in a [`ZoneStateMachine`], and emits [`AnimationIntent`]s that a
//! [`CursorPlayer`] applies to presentation.

mod geometry;
mod player;
mod settings;
mod state_machine;
mod zone;

pub use geometry::*;
pub use player::*;
pub use settings::*;
pub use state_machine::*;
pub use zone::*;

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::player::CursorPlayer;
    pub use crate::settings::CursorSettings;
    pub use crate::state_machine::{AnimationIntent, ZoneState, ZoneStateMachine};
    pub use crate::zone::{classify, Side, Zone, ZoneClassifier};
}

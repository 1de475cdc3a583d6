//! Testing utilities and harness for edgecursor

pub mod host;
pub mod player;
pub mod robot;

pub use host::*;
pub use player::*;
pub use robot::*;

pub mod prelude {
    pub use crate::host::{FakeHost, FakeSubscription, FakeTarget, FAKE_EVENTS};
    pub use crate::player::{PlayerCall, RecordingPlayer};
    pub use crate::robot::CursorRobot;
}

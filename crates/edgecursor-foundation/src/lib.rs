//! Bridges host input signals to the zone state machine.
//!
//! A host implements [`CursorHost`]; [`activate`] (or [`CursorLauncher`])
//! subscribes a [`PointerTracker`] to its signals and returns a
//! [`CursorHandle`] whose drop releases the subscription.

mod activation;
mod error;
mod host;
mod tracker;

pub use activation::*;
pub use error::*;
pub use host::*;
pub use tracker::*;

pub mod prelude {
    pub use crate::activation::{activate, CursorHandle, CursorLauncher, InactiveReason};
    pub use crate::error::ActivationError;
    pub use crate::host::{CursorHost, HostSignal, SignalHandler};
    pub use crate::tracker::{PointerSample, PointerTracker};
}

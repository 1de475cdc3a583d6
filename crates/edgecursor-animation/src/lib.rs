//! Animation system for edgecursor
//!
//! Provides ease-out tweens driven by externally supplied frame timestamps,
//! and [`CursorAnimator`], a [`CursorPlayer`] that turns animation intents
//! into per-frame visual values.
//!
//! [`CursorPlayer`]: edgecursor_core::CursorPlayer

mod animator;
mod tween;

pub use animator::*;
pub use tween::*;

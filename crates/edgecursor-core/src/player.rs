use crate::geometry::Point;
use crate::state_machine::AnimationIntent;
use crate::zone::Side;

/// Applies decisions to presentation.
///
/// The tracker and state machine only decide; implementors own the actual
/// visual transition (offsets, opacity, scale) and its timing.
pub trait CursorPlayer {
    /// Start the directional transition described by `intent`.
    fn play(&mut self, intent: AnimationIntent);

    /// Hide the arrow on `side` immediately, overriding anything in flight.
    fn cancel(&mut self, side: Side);

    /// Show or hide the indicator and flip the native cursor accordingly.
    fn set_visible(&mut self, visible: bool);

    /// Scale the inner glyph down while pressed, back up on release.
    fn set_pressed(&mut self, pressed: bool);

    /// Place the indicator at the pointer position.
    fn move_to(&mut self, position: Point);
}

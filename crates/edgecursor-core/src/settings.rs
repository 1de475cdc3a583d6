use crate::zone::DEFAULT_EDGE_FRACTION;

/// Positional transform duration the player must honor, in milliseconds.
pub const SLIDE_DURATION_MILLIS: u64 = 500;
/// Opacity fade duration the player must honor, in milliseconds.
pub const FADE_DURATION_MILLIS: u64 = 166;
/// Press/release scale duration, in milliseconds.
pub const PRESS_DURATION_MILLIS: u64 = 166;
/// Scale of the inner glyph while the pointer is pressed.
pub const PRESSED_SCALE: f32 = 0.75;
/// Distance an arrow travels between its hidden and resting offsets.
pub const ARROW_TRAVEL: f32 = 20.0;

/// Configuration for the pointer indicator.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorSettings {
    /// Fraction of the viewport width treated as an edge zone on each side.
    pub edge_fraction: f32,
    /// Arrow offset magnitude used in animation intents.
    pub arrow_travel: f32,
    pub slide_duration_millis: u64,
    pub fade_duration_millis: u64,
    pub press_duration_millis: u64,
    pub pressed_scale: f32,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            edge_fraction: DEFAULT_EDGE_FRACTION,
            arrow_travel: ARROW_TRAVEL,
            slide_duration_millis: SLIDE_DURATION_MILLIS,
            fade_duration_millis: FADE_DURATION_MILLIS,
            press_duration_millis: PRESS_DURATION_MILLIS,
            pressed_scale: PRESSED_SCALE,
        }
    }
}

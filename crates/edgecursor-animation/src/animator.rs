//! Reference player that turns intents into per-frame visual values.

use edgecursor_core::{AnimationIntent, CursorPlayer, CursorSettings, Point, Side};

use crate::tween::Tween;

/// Visual state of one arrow at a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowFrame {
    /// Horizontal offset from the arrow's resting position.
    pub offset: f32,
    pub opacity: f32,
}

/// Snapshot of everything a renderer needs to draw the indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub position: Point,
    pub visible: bool,
    /// Scale of the inner glyph.
    pub scale: f32,
    pub left: ArrowFrame,
    pub right: ArrowFrame,
}

#[derive(Debug, Clone)]
struct ArrowTracks {
    offset: Tween,
    opacity: Tween,
}

impl ArrowTracks {
    fn hidden(side: Side, travel: f32) -> Self {
        Self {
            offset: Tween::new(side.travel_sign() * travel),
            opacity: Tween::new(0.0),
        }
    }

    fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let offset = self.offset.on_frame(frame_time_nanos);
        let opacity = self.opacity.on_frame(frame_time_nanos);
        offset || opacity
    }

    fn is_running(&self) -> bool {
        self.offset.is_running() || self.opacity.is_running()
    }

    fn frame(&self) -> ArrowFrame {
        ArrowFrame {
            offset: self.offset.value(),
            opacity: self.opacity.value(),
        }
    }
}

/// [`CursorPlayer`] that animates the indicator in response to intents.
///
/// Positional transforms use the configured slide duration, opacity changes
/// the fade duration. Call [`CursorAnimator::advance`] once per frame and
/// read [`CursorAnimator::frame`] to render.
#[derive(Debug, Clone)]
pub struct CursorAnimator {
    slide_millis: u64,
    fade_millis: u64,
    press_millis: u64,
    pressed_scale: f32,
    position: Point,
    visible: bool,
    scale: Tween,
    left: ArrowTracks,
    right: ArrowTracks,
}

impl CursorAnimator {
    pub fn new(settings: &CursorSettings) -> Self {
        Self {
            slide_millis: settings.slide_duration_millis,
            fade_millis: settings.fade_duration_millis,
            press_millis: settings.press_duration_millis,
            pressed_scale: settings.pressed_scale,
            position: Point::ZERO,
            visible: false,
            scale: Tween::new(1.0),
            left: ArrowTracks::hidden(Side::Left, settings.arrow_travel),
            right: ArrowTracks::hidden(Side::Right, settings.arrow_travel),
        }
    }

    fn arrow_mut(&mut self, side: Side) -> &mut ArrowTracks {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Advance every running tween to `frame_time_nanos`.
    /// Returns `true` while another frame is needed.
    pub fn advance(&mut self, frame_time_nanos: u64) -> bool {
        let scale = self.scale.on_frame(frame_time_nanos);
        let left = self.left.on_frame(frame_time_nanos);
        let right = self.right.on_frame(frame_time_nanos);
        scale || left || right
    }

    pub fn is_animating(&self) -> bool {
        self.scale.is_running() || self.left.is_running() || self.right.is_running()
    }

    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            position: self.position,
            visible: self.visible,
            scale: self.scale.value(),
            left: self.left.frame(),
            right: self.right.frame(),
        }
    }
}

impl Default for CursorAnimator {
    fn default() -> Self {
        Self::new(&CursorSettings::default())
    }
}

impl CursorPlayer for CursorAnimator {
    fn play(&mut self, intent: AnimationIntent) {
        log::trace!(
            "{:?} arrow: offset {} -> {}, opacity -> {}",
            intent.side,
            intent.from_offset,
            intent.to_offset,
            intent.to_opacity
        );
        let (slide, fade) = (self.slide_millis, self.fade_millis);
        let arrow = self.arrow_mut(intent.side);
        arrow.offset.snap_to(intent.from_offset);
        arrow.offset.animate_to(intent.to_offset, slide);
        arrow.opacity.animate_to(intent.to_opacity, fade);
    }

    fn cancel(&mut self, side: Side) {
        let arrow = self.arrow_mut(side);
        let offset = arrow.offset.value();
        arrow.offset.snap_to(offset);
        arrow.opacity.snap_to(0.0);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_pressed(&mut self, pressed: bool) {
        let target = if pressed { self.pressed_scale } else { 1.0 };
        self.scale.animate_to(target, self.press_millis);
    }

    fn move_to(&mut self, position: Point) {
        self.position = position;
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;

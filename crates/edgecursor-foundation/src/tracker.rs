use edgecursor_core::{CursorPlayer, CursorSettings, Point, ZoneState, ZoneStateMachine};

use crate::host::{CursorHost, HostSignal};

/// Normalized pointer movement, produced on every move and not retained by
/// the state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub over_opaque_target: bool,
    pub pressed: bool,
}

/// Turns host signals into samples, visibility and press state, and forwards
/// zone transitions to the player.
pub struct PointerTracker<P: CursorPlayer> {
    machine: ZoneStateMachine,
    player: P,
    visible: bool,
    pressed: bool,
}

impl<P: CursorPlayer> PointerTracker<P> {
    pub fn new(player: P, settings: &CursorSettings) -> Self {
        Self {
            machine: ZoneStateMachine::with_settings(settings),
            player,
            visible: false,
            pressed: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn zone_state(&self) -> ZoneState {
        self.machine.state()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Route one host signal, resolving host capabilities for moves.
    pub fn handle<H>(&mut self, host: &H, signal: HostSignal<H::Target>)
    where
        H: CursorHost + ?Sized,
    {
        match signal {
            HostSignal::Move {
                client_x,
                client_y,
                target,
            } => {
                let opaque = host.is_opaque_target(&target);
                self.on_move(client_x, client_y, opaque, host.viewport_width());
            }
            HostSignal::Enter => self.on_enter(),
            HostSignal::Leave => self.on_leave(),
            HostSignal::Down => self.on_press(),
            HostSignal::Up => self.on_release(),
        }
    }

    pub fn on_move(
        &mut self,
        x: f32,
        y: f32,
        over_opaque_target: bool,
        viewport_width: f32,
    ) -> PointerSample {
        let sample = PointerSample {
            x,
            y,
            over_opaque_target,
            pressed: self.pressed,
        };

        self.set_visible(!over_opaque_target);
        self.player.move_to(Point::new(x, y));

        if let Some(intent) = self.machine.update(x, viewport_width) {
            if let Some(side) = intent.cancels {
                self.player.cancel(side);
            }
            self.player.play(intent);
        }
        sample
    }

    /// Zone state is kept across enter/leave so re-entering in the same zone
    /// does not replay an arrow already at rest.
    pub fn on_enter(&mut self) {
        self.set_visible(true);
    }

    pub fn on_leave(&mut self) {
        self.set_visible(false);
    }

    pub fn on_press(&mut self) {
        self.pressed = true;
        self.player.set_pressed(true);
    }

    pub fn on_release(&mut self) {
        self.pressed = false;
        self.player.set_pressed(false);
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.player.set_visible(visible);
        }
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;

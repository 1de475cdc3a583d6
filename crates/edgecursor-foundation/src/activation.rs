//! Scoped subscription of a tracker to a host.

use std::cell::RefCell;
use std::rc::Rc;

use edgecursor_core::{CursorPlayer, CursorSettings};

use crate::error::ActivationError;
use crate::host::{CursorHost, HostSignal, SignalHandler};
use crate::tracker::PointerTracker;

/// Why a [`CursorHandle`] holds no subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InactiveReason {
    /// Touch-primary device; native cursor behavior is left untouched.
    TouchPrimaryDevice,
    /// The host could not be subscribed to.
    Failed(ActivationError),
}

/// Result of [`activate`]. Dropping the handle (or calling
/// [`CursorHandle::deactivate`]) releases the host subscription exactly once.
pub struct CursorHandle<S, P: CursorPlayer> {
    subscription: Option<S>,
    tracker: Option<Rc<RefCell<PointerTracker<P>>>>,
    inactive: Option<InactiveReason>,
}

impl<S, P: CursorPlayer> CursorHandle<S, P> {
    /// A handle that never subscribed, for hosts that fail before activation.
    pub fn inactive(reason: InactiveReason) -> Self {
        Self {
            subscription: None,
            tracker: None,
            inactive: Some(reason),
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn inactive_reason(&self) -> Option<&InactiveReason> {
        self.inactive.as_ref()
    }

    /// Run `f` against the live tracker, `None` when inactive.
    pub fn with_tracker<R>(&self, f: impl FnOnce(&mut PointerTracker<P>) -> R) -> Option<R> {
        self.tracker.as_ref().map(|tracker| f(&mut tracker.borrow_mut()))
    }

    pub fn deactivate(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            drop(subscription);
            log::debug!("edgecursor deactivated");
        }
        self.tracker = None;
    }
}

impl<S, P: CursorPlayer> Drop for CursorHandle<S, P> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Subscribe a new tracker driving `player` to `host`.
///
/// Touch-primary devices and subscription failures both yield an inactive
/// handle; no error is surfaced beyond a log line.
pub fn activate<H, P>(
    host: Rc<H>,
    player: P,
    settings: &CursorSettings,
) -> CursorHandle<H::Subscription, P>
where
    H: CursorHost + 'static,
    H::Target: 'static,
    P: CursorPlayer + 'static,
{
    if host.is_touch_primary_device() {
        log::debug!("edgecursor inactive: touch-primary device");
        return CursorHandle::inactive(InactiveReason::TouchPrimaryDevice);
    }

    let tracker = Rc::new(RefCell::new(PointerTracker::new(player, settings)));
    let handler: SignalHandler<H::Target> = {
        let host = Rc::clone(&host);
        let tracker = Rc::clone(&tracker);
        Rc::new(move |signal: HostSignal<H::Target>| {
            tracker.borrow_mut().handle(&*host, signal);
        })
    };

    match host.subscribe(handler) {
        Ok(subscription) => {
            log::debug!("edgecursor activated");
            CursorHandle {
                subscription: Some(subscription),
                tracker: Some(tracker),
                inactive: None,
            }
        }
        Err(err) => {
            log::warn!("edgecursor inactive: {err}");
            CursorHandle::inactive(InactiveReason::Failed(err))
        }
    }
}

/// Builder over [`CursorSettings`] that activates against a host.
///
/// ```
/// use edgecursor_foundation::CursorLauncher;
///
/// let launcher = CursorLauncher::new()
///     .with_edge_fraction(0.2)
///     .with_pressed_scale(0.8);
/// assert_eq!(launcher.settings().edge_fraction, 0.2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CursorLauncher {
    settings: CursorSettings,
}

impl CursorLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: CursorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_edge_fraction(mut self, edge_fraction: f32) -> Self {
        self.settings.edge_fraction = edge_fraction;
        self
    }

    pub fn with_arrow_travel(mut self, travel: f32) -> Self {
        self.settings.arrow_travel = travel;
        self
    }

    pub fn with_slide_duration(mut self, millis: u64) -> Self {
        self.settings.slide_duration_millis = millis;
        self
    }

    pub fn with_fade_duration(mut self, millis: u64) -> Self {
        self.settings.fade_duration_millis = millis;
        self
    }

    pub fn with_press_duration(mut self, millis: u64) -> Self {
        self.settings.press_duration_millis = millis;
        self
    }

    pub fn with_pressed_scale(mut self, scale: f32) -> Self {
        self.settings.pressed_scale = scale;
        self
    }

    pub fn settings(&self) -> &CursorSettings {
        &self.settings
    }

    pub fn launch<H, P>(&self, host: Rc<H>, player: P) -> CursorHandle<H::Subscription, P>
    where
        H: CursorHost + 'static,
        H::Target: 'static,
        P: CursorPlayer + 'static,
    {
        activate(host, player, &self.settings)
    }

    /// Like [`CursorLauncher::launch`], building the player from the settings.
    pub fn launch_with<H, P>(
        &self,
        host: Rc<H>,
        make_player: impl FnOnce(&CursorSettings) -> P,
    ) -> CursorHandle<H::Subscription, P>
    where
        H: CursorHost + 'static,
        H::Target: 'static,
        P: CursorPlayer + 'static,
    {
        let player = make_player(&self.settings);
        activate(host, player, &self.settings)
    }
}

#[cfg(test)]
#[path = "tests/activation_tests.rs"]
mod tests;

//! In-memory host with controllable capabilities.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use edgecursor_foundation::{ActivationError, CursorHost, HostSignal, SignalHandler};

/// What the fake pointer is hovering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FakeTarget {
    #[default]
    Page,
    /// An embedded foreign frame.
    Frame,
}

/// Events a subscription listens to, in registration order.
pub const FAKE_EVENTS: [&str; 5] = [
    "mousemove",
    "mouseenter",
    "mouseleave",
    "mousedown",
    "mouseup",
];

#[derive(Default)]
struct Registry {
    handler: RefCell<Option<SignalHandler<FakeTarget>>>,
    live_listeners: Cell<usize>,
    subscribes: Cell<usize>,
    unsubscribes: Cell<usize>,
}

impl Registry {
    fn add_listener(&self) {
        self.live_listeners.set(self.live_listeners.get() + 1);
    }

    fn remove_listeners(&self, count: usize) {
        self.live_listeners.set(self.live_listeners.get().saturating_sub(count));
    }
}

/// Host whose touch flag, width and subscription outcome are set by the test.
pub struct FakeHost {
    touch_primary: bool,
    fail_subscribe: bool,
    fail_at_listener: Option<usize>,
    width: Cell<f32>,
    width_queries: Cell<usize>,
    registry: Rc<Registry>,
}

impl FakeHost {
    pub fn new(width: f32) -> Self {
        Self {
            touch_primary: false,
            fail_subscribe: false,
            fail_at_listener: None,
            width: Cell::new(width),
            width_queries: Cell::new(0),
            registry: Rc::new(Registry::default()),
        }
    }

    pub fn touch_primary(mut self) -> Self {
        self.touch_primary = true;
        self
    }

    pub fn failing_subscribe(mut self) -> Self {
        self.fail_subscribe = true;
        self
    }

    /// Makes registration of the `index`th listener of [`FAKE_EVENTS`] fail
    /// after the earlier ones were added.
    pub fn failing_listener(mut self, index: usize) -> Self {
        self.fail_at_listener = Some(index);
        self
    }

    pub fn set_width(&self, width: f32) {
        self.width.set(width);
    }

    pub fn is_subscribed(&self) -> bool {
        self.registry.handler.borrow().is_some()
    }

    /// Listeners currently registered with the host.
    pub fn live_listeners(&self) -> usize {
        self.registry.live_listeners.get()
    }

    pub fn subscribe_count(&self) -> usize {
        self.registry.subscribes.get()
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.registry.unsubscribes.get()
    }

    pub fn width_queries(&self) -> usize {
        self.width_queries.get()
    }

    /// Deliver `signal` to the subscriber. Returns `false` when nobody listens.
    pub fn emit(&self, signal: HostSignal<FakeTarget>) -> bool {
        let handler = self.registry.handler.borrow().clone();
        match handler {
            Some(handler) => {
                handler(signal);
                true
            }
            None => false,
        }
    }
}

/// Releases the fake registration on drop.
pub struct FakeSubscription {
    registry: Weak<Registry>,
    listeners: usize,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.handler.borrow_mut().take();
            registry.remove_listeners(self.listeners);
            registry.unsubscribes.set(registry.unsubscribes.get() + 1);
        }
    }
}

impl CursorHost for FakeHost {
    type Target = FakeTarget;
    type Subscription = FakeSubscription;

    fn is_touch_primary_device(&self) -> bool {
        self.touch_primary
    }

    fn viewport_width(&self) -> f32 {
        self.width_queries.set(self.width_queries.get() + 1);
        self.width.get()
    }

    fn is_opaque_target(&self, target: &FakeTarget) -> bool {
        *target == FakeTarget::Frame
    }

    fn subscribe(
        &self,
        handler: SignalHandler<FakeTarget>,
    ) -> Result<FakeSubscription, ActivationError> {
        if self.fail_subscribe {
            return Err(ActivationError::NoHostDocument);
        }
        let mut slot = self.registry.handler.borrow_mut();
        if slot.is_some() {
            return Err(ActivationError::Subscribe {
                event: "pointer",
                reason: "already subscribed".into(),
            });
        }
        for (index, event) in FAKE_EVENTS.into_iter().enumerate() {
            if self.fail_at_listener == Some(index) {
                self.registry.remove_listeners(index);
                return Err(ActivationError::Subscribe {
                    event,
                    reason: "listener rejected".into(),
                });
            }
            self.registry.add_listener();
        }
        *slot = Some(handler);
        self.registry.subscribes.set(self.registry.subscribes.get() + 1);
        Ok(FakeSubscription {
            registry: Rc::downgrade(&self.registry),
            listeners: FAKE_EVENTS.len(),
        })
    }
}

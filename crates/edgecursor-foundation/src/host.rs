use std::rc::Rc;

use crate::error::ActivationError;

/// Raw input signal delivered by a host, in delivery order.
#[derive(Clone, Debug, PartialEq)]
pub enum HostSignal<T> {
    Move {
        client_x: f32,
        client_y: f32,
        target: T,
    },
    Enter,
    Leave,
    Down,
    Up,
}

/// Callback a host invokes for every signal.
pub type SignalHandler<T> = Rc<dyn Fn(HostSignal<T>)>;

/// Capabilities the pointer indicator needs from its environment.
pub trait CursorHost {
    /// Whatever the host reports as the element under the pointer.
    type Target;
    /// Dropping the subscription must unregister every listener it registered.
    type Subscription;

    /// Checked once at activation.
    fn is_touch_primary_device(&self) -> bool;

    /// Queried on every move.
    fn viewport_width(&self) -> f32;

    /// Whether the synthetic cursor must defer to the native one over `target`.
    fn is_opaque_target(&self, target: &Self::Target) -> bool;

    /// Register `handler` for all pointer signals.
    ///
    /// On error nothing may remain registered.
    fn subscribe(
        &self,
        handler: SignalHandler<Self::Target>,
    ) -> Result<Self::Subscription, ActivationError>;
}

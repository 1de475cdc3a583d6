use edgecursor_foundation::{ActivationError, CursorHost, HostSignal, SignalHandler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, MouseEvent, Window};

/// Media query matching devices whose primary pointer is a finger.
pub const TOUCH_PRIMARY_QUERY: &str = "(pointer: coarse)";

/// Whether the synthetic cursor must defer to the native one over an element
/// with this local name. Embedded frames swallow mouse events, so the
/// indicator would freeze over them.
pub fn is_opaque_local_name(local_name: &str) -> bool {
    local_name.eq_ignore_ascii_case("iframe")
}

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self, ActivationError> {
        let window = web_sys::window().ok_or(ActivationError::NoHostWindow)?;
        let document = window.document().ok_or(ActivationError::NoHostDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl CursorHost for WebHost {
    type Target = Option<Element>;
    type Subscription = WebSubscription;

    fn is_touch_primary_device(&self) -> bool {
        match self.window.match_media(TOUCH_PRIMARY_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::debug!("matchMedia failed: {:?}", err);
                false
            }
        }
    }

    fn viewport_width(&self) -> f32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|root| root.client_width() as f64)
            })
            .unwrap_or(0.0) as f32
    }

    fn is_opaque_target(&self, target: &Option<Element>) -> bool {
        target
            .as_ref()
            .is_some_and(|element| is_opaque_local_name(&element.local_name()))
    }

    fn subscribe(
        &self,
        handler: SignalHandler<Option<Element>>,
    ) -> Result<WebSubscription, ActivationError> {
        let root: EventTarget = self
            .document
            .document_element()
            .ok_or(ActivationError::NoHostDocument)?
            .into();
        let window: &EventTarget = self.window.as_ref();

        // Dropped on any early return, which removes what was registered so far.
        let mut subscription = WebSubscription::default();

        let move_handler = handler.clone();
        subscription.listen(window, "mousemove", move |event: MouseEvent| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok());
            move_handler(HostSignal::Move {
                client_x: event.client_x() as f32,
                client_y: event.client_y() as f32,
                target,
            });
        })?;

        for (target, event, signal) in [
            (&root, "mouseenter", HostSignal::Enter),
            (&root, "mouseleave", HostSignal::Leave),
            (window, "mousedown", HostSignal::Down),
            (window, "mouseup", HostSignal::Up),
        ] {
            let handler = handler.clone();
            subscription.listen(target, event, move |_event: MouseEvent| {
                handler(signal.clone());
            })?;
        }

        Ok(subscription)
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

/// Registered DOM listeners; dropping removes every one of them.
#[derive(Default)]
pub struct WebSubscription {
    listeners: Vec<Listener>,
}

impl WebSubscription {
    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(MouseEvent) + 'static,
    ) -> Result<(), ActivationError> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(MouseEvent)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| ActivationError::Subscribe {
                event,
                reason: format!("{:?}", err),
            })?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }
}

impl Drop for WebSubscription {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to remove `{}` listener: {:?}", listener.event, err);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;

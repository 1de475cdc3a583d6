use super::*;

use std::cell::Cell;

use edgecursor_core::{AnimationIntent, Point, Side};

#[derive(Default)]
struct Count {
    plays: usize,
}

impl CursorPlayer for Count {
    fn play(&mut self, _intent: AnimationIntent) {
        self.plays += 1;
    }
    fn cancel(&mut self, _side: Side) {}
    fn set_visible(&mut self, _visible: bool) {}
    fn set_pressed(&mut self, _pressed: bool) {}
    fn move_to(&mut self, _position: Point) {}
}

#[derive(Default)]
struct StubHost {
    touch: bool,
    fail: bool,
    handler: RefCell<Option<SignalHandler<()>>>,
    live: Rc<Cell<usize>>,
}

struct StubSubscription(Rc<Cell<usize>>);

impl Drop for StubSubscription {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl StubHost {
    fn emit(&self, signal: HostSignal<()>) {
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            handler(signal);
        }
    }
}

impl CursorHost for StubHost {
    type Target = ();
    type Subscription = StubSubscription;

    fn is_touch_primary_device(&self) -> bool {
        self.touch
    }

    fn viewport_width(&self) -> f32 {
        1000.0
    }

    fn is_opaque_target(&self, _target: &()) -> bool {
        false
    }

    fn subscribe(
        &self,
        handler: SignalHandler<()>,
    ) -> Result<StubSubscription, ActivationError> {
        if self.fail {
            return Err(ActivationError::NoHostDocument);
        }
        *self.handler.borrow_mut() = Some(handler);
        self.live.set(self.live.get() + 1);
        Ok(StubSubscription(Rc::clone(&self.live)))
    }
}

fn move_to(x: f32) -> HostSignal<()> {
    HostSignal::Move {
        client_x: x,
        client_y: 0.0,
        target: (),
    }
}

#[test]
fn active_handle_routes_signals_to_tracker() {
    let host = Rc::new(StubHost::default());
    let handle = activate(Rc::clone(&host), Count::default(), &CursorSettings::default());
    assert!(handle.is_active());
    assert_eq!(host.live.get(), 1);

    host.emit(move_to(10.0));
    host.emit(move_to(20.0));
    host.emit(HostSignal::Down);
    assert_eq!(handle.with_tracker(|t| t.player().plays), Some(1));
    assert_eq!(handle.with_tracker(|t| t.pressed()), Some(true));

    host.handler.borrow_mut().take();
    handle.deactivate();
    assert_eq!(host.live.get(), 0);
}

#[test]
fn touch_device_never_subscribes() {
    let host = Rc::new(StubHost {
        touch: true,
        ..StubHost::default()
    });
    let handle = activate(Rc::clone(&host), Count::default(), &CursorSettings::default());
    assert!(!handle.is_active());
    assert_eq!(
        handle.inactive_reason(),
        Some(&InactiveReason::TouchPrimaryDevice)
    );
    assert_eq!(host.live.get(), 0);
    assert!(host.handler.borrow().is_none());
    assert_eq!(handle.with_tracker(|t| t.player().plays), None);
}

#[test]
fn subscription_failure_degrades_to_inactive() {
    let host = Rc::new(StubHost {
        fail: true,
        ..StubHost::default()
    });
    let handle = activate(Rc::clone(&host), Count::default(), &CursorSettings::default());
    assert!(!handle.is_active());
    assert_eq!(
        handle.inactive_reason(),
        Some(&InactiveReason::Failed(ActivationError::NoHostDocument))
    );
}

#[test]
fn dropping_handle_releases_once() {
    let host = Rc::new(StubHost::default());
    {
        let _handle = activate(Rc::clone(&host), Count::default(), &CursorSettings::default());
        assert_eq!(host.live.get(), 1);
        host.handler.borrow_mut().take();
    }
    assert_eq!(host.live.get(), 0);
}

#[test]
fn launcher_applies_settings() {
    let host = Rc::new(StubHost::default());
    let handle = CursorLauncher::new()
        .with_edge_fraction(0.4)
        .launch(Rc::clone(&host), Count::default());

    host.emit(move_to(350.0));
    assert_eq!(handle.with_tracker(|t| t.player().plays), Some(1));
    host.handler.borrow_mut().take();
}

#[test]
fn activation_error_messages_name_the_event() {
    let err = ActivationError::Subscribe {
        event: "mousemove",
        reason: "denied".into(),
    };
    assert_eq!(err.to_string(), "failed to subscribe to `mousemove`: denied");
}

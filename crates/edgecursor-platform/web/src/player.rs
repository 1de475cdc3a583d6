//! DOM renderer for the indicator.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use edgecursor_animation::{ArrowFrame, CursorAnimator, CursorFrame};
use edgecursor_core::{AnimationIntent, CursorPlayer, CursorSettings, Point, Side};
use edgecursor_foundation::ActivationError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Element ids the indicator is rendered into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorElementIds {
    pub pointer: String,
    pub inner: String,
    pub arrow_left: String,
    pub arrow_right: String,
}

impl Default for CursorElementIds {
    fn default() -> Self {
        Self {
            pointer: "cursor-pointer".into(),
            inner: "cursor-inner".into(),
            arrow_left: "cursor-arrow-left".into(),
            arrow_right: "cursor-arrow-right".into(),
        }
    }
}

pub struct CursorElements {
    pub pointer: HtmlElement,
    pub inner: HtmlElement,
    pub arrow_left: HtmlElement,
    pub arrow_right: HtmlElement,
}

impl CursorElements {
    pub fn find(document: &Document, ids: &CursorElementIds) -> Result<Self, ActivationError> {
        let lookup = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                .ok_or_else(|| ActivationError::MissingElement { id: id.to_string() })
        };
        Ok(Self {
            pointer: lookup(ids.pointer.as_str())?,
            inner: lookup(ids.inner.as_str())?,
            arrow_left: lookup(ids.arrow_left.as_str())?,
            arrow_right: lookup(ids.arrow_right.as_str())?,
        })
    }
}

pub fn pointer_transform(position: Point) -> String {
    format!(
        "translate3d({}px, {}px, 0) translate(-50%, -50%)",
        position.x, position.y
    )
}

pub fn inner_transform(scale: f32) -> String {
    format!("translate(-50%, -50%) scale({})", scale)
}

pub fn arrow_transform(offset: f32) -> String {
    format!("translateX({}px)", offset)
}

/// Native cursor style while the indicator is (in)visible.
pub fn native_cursor(indicator_visible: bool) -> &'static str {
    if indicator_visible {
        "none"
    } else {
        "default"
    }
}

/// Milliseconds since page load, as passed to `requestAnimationFrame`
/// callbacks, to frame nanoseconds.
pub fn frame_time_nanos(timestamp_millis: f64) -> u64 {
    if timestamp_millis.is_finite() && timestamp_millis > 0.0 {
        (timestamp_millis * 1_000_000.0) as u64
    } else {
        0
    }
}

struct DomPlayerInner {
    window: Window,
    body: Option<HtmlElement>,
    elements: CursorElements,
    animator: RefCell<CursorAnimator>,
    frame_callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending_frame: Cell<Option<i32>>,
    native_cursor_hidden: Cell<bool>,
}

impl DomPlayerInner {
    fn on_frame(&self, timestamp_millis: f64) {
        self.pending_frame.set(None);
        let more = self
            .animator
            .borrow_mut()
            .advance(frame_time_nanos(timestamp_millis));
        self.render();
        if more {
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        if self.pending_frame.get().is_some() {
            return;
        }
        let callback = self.frame_callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending_frame.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {:?}", err),
        }
    }

    fn render(&self) {
        let frame = self.animator.borrow().frame();
        self.apply(&frame);
    }

    fn apply(&self, frame: &CursorFrame) {
        let pointer = &self.elements.pointer;
        set_style(pointer, "transform", &pointer_transform(frame.position));
        set_style(pointer, "opacity", if frame.visible { "1" } else { "0" });
        set_style(&self.elements.inner, "transform", &inner_transform(frame.scale));
        apply_arrow(&self.elements.arrow_left, frame.left);
        apply_arrow(&self.elements.arrow_right, frame.right);
    }

    fn set_native_cursor(&self, indicator_visible: bool) {
        if let Some(body) = &self.body {
            set_style(body, "cursor", native_cursor(indicator_visible));
            self.native_cursor_hidden.set(indicator_visible);
        }
    }
}

impl Drop for DomPlayerInner {
    fn drop(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::debug!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        if self.native_cursor_hidden.get() {
            self.set_native_cursor(false);
        }
    }
}

fn apply_arrow(element: &HtmlElement, arrow: ArrowFrame) {
    set_style(element, "transform", &arrow_transform(arrow.offset));
    set_style(element, "opacity", &arrow.opacity.to_string());
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::trace!("failed to set {property}: {:?}", err);
    }
}

/// [`CursorPlayer`] writing a [`CursorAnimator`]'s frames into the page.
///
/// Runs a `requestAnimationFrame` loop only while a tween is in flight.
pub struct DomPlayer {
    inner: Rc<DomPlayerInner>,
}

impl DomPlayer {
    pub fn new(
        window: Window,
        body: Option<HtmlElement>,
        elements: CursorElements,
        settings: &CursorSettings,
    ) -> Self {
        let inner = Rc::new(DomPlayerInner {
            window,
            body,
            elements,
            animator: RefCell::new(CursorAnimator::new(settings)),
            frame_callback: RefCell::new(None),
            pending_frame: Cell::new(None),
            native_cursor_hidden: Cell::new(false),
        });

        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.frame_callback.borrow_mut() = Some(callback);
        inner.render();

        Self { inner }
    }

    pub fn frame(&self) -> CursorFrame {
        self.inner.animator.borrow().frame()
    }

    fn after_change(&self) {
        self.inner.render();
        if self.inner.animator.borrow().is_animating() {
            self.inner.request_frame();
        }
    }
}

impl CursorPlayer for DomPlayer {
    fn play(&mut self, intent: AnimationIntent) {
        self.inner.animator.borrow_mut().play(intent);
        self.after_change();
    }

    fn cancel(&mut self, side: Side) {
        self.inner.animator.borrow_mut().cancel(side);
        self.after_change();
    }

    fn set_visible(&mut self, visible: bool) {
        self.inner.animator.borrow_mut().set_visible(visible);
        self.inner.set_native_cursor(visible);
        self.inner.render();
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.inner.animator.borrow_mut().set_pressed(pressed);
        self.after_change();
    }

    fn move_to(&mut self, position: Point) {
        self.inner.animator.borrow_mut().move_to(position);
        self.inner.render();
    }
}

#[cfg(test)]
#[path = "tests/player_tests.rs"]
mod tests;

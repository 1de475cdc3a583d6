//! Browser adapter for edgecursor.
//!
//! [`WebHost`] supplies the pointer signals and capabilities of the page,
//! [`DomPlayer`] renders the indicator by writing inline styles on a
//! `requestAnimationFrame` loop. [`launch`] wires both together.

mod host;
mod player;

pub use host::*;
pub use player::*;

use std::rc::Rc;

use edgecursor_foundation::{CursorHandle, CursorLauncher, InactiveReason};

pub type WebCursorHandle = CursorHandle<WebSubscription, DomPlayer>;

/// Activate the indicator on the current page.
///
/// Keep the returned handle for as long as the indicator is mounted and drop
/// it on unmount. On touch-primary devices, or when the page has no window or
/// document, the handle is inactive and the native cursor is left alone.
pub fn launch(launcher: &CursorLauncher, ids: &CursorElementIds) -> WebCursorHandle {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let host = match WebHost::new() {
        Ok(host) => Rc::new(host),
        Err(err) => {
            log::warn!("edgecursor inactive: {err}");
            return CursorHandle::inactive(InactiveReason::Failed(err));
        }
    };
    let elements = match CursorElements::find(host.document(), ids) {
        Ok(elements) => elements,
        Err(err) => {
            log::warn!("edgecursor inactive: {err}");
            return CursorHandle::inactive(InactiveReason::Failed(err));
        }
    };

    let window = host.window().clone();
    let body = host.document().body();
    launcher.launch_with(host, move |settings| {
        DomPlayer::new(window, body, elements, settings)
    })
}

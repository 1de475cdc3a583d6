//! Mounts the edge cursor on a page that provides the default element ids.
//!
//! The host page calls `mount()` when the cursor markup is attached and
//! `unmount()` when it is removed.

use std::cell::RefCell;

use edgecursor_foundation::CursorLauncher;
use edgecursor_platform_web::{launch, CursorElementIds, WebCursorHandle};
use wasm_bindgen::prelude::*;

thread_local! {
    static HANDLE: RefCell<Option<WebCursorHandle>> = const { RefCell::new(None) };
}

/// Returns whether the custom cursor is active on this device.
#[wasm_bindgen]
pub fn mount() -> bool {
    HANDLE.with(|slot| {
        let mut slot = slot.borrow_mut();
        // Remounting releases the previous subscription first.
        drop(slot.take());
        let handle = launch(&CursorLauncher::new(), &CursorElementIds::default());
        let active = handle.is_active();
        *slot = Some(handle);
        active
    })
}

#[wasm_bindgen]
pub fn unmount() {
    HANDLE.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.deactivate();
        }
    });
    log::debug!("edgecursor demo unmounted");
}

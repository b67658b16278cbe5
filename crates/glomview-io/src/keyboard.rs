//! Window-level keyboard listener.
//!
//! Keydown events are taken from the window rather than from a focused
//! element, so shortcuts keep working when the element that had focus
//! is removed from the page. Requires a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// DOM event name the listener is registered for.
const KEYDOWN: &str = "keydown";

/// A `keydown` listener on the global window, removed on drop.
pub struct KeyListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl KeyListener {
    /// Register `handler` for every keydown on the window.
    ///
    /// # Errors
    ///
    /// Returns the browser's error if there is no global window or the
    /// listener cannot be added.
    pub fn attach(handler: impl FnMut(web_sys::KeyboardEvent) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(handler);
        window.add_event_listener_with_callback(KEYDOWN, callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback(KEYDOWN, self.callback.as_ref().unchecked_ref());
        if let Err(e) = removed {
            web_sys::console::warn_1(&format!("failed to remove keydown listener: {e:?}").into());
        }
    }
}

/// Whether the event was dispatched to an `<input type="range">`.
#[must_use]
pub fn targets_range_input(event: &web_sys::KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .is_some_and(|input| input.type_() == "range")
}

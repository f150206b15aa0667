//! Event listeners tied to Rust ownership
//!
//! A `Closure` handed to `addEventListener` must outlive the registration.
//! Rather than `Closure::forget()`, [`EventListener`] owns the closure and
//! removes the listener when dropped, so every listener the viewer registers
//! goes away with the viewer:
//!
//! ```ignore
//! let listener = EventListener::new(&document, "keydown", |event| { /* ... */ })?;
//! drop(listener); // listener removed
//! ```

use crate::error::LightboxError;
use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys_x::Event)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Result<Self, LightboxError> {
        let callback: Closure<dyn FnMut(web_sys_x::Event)> = Closure::wrap(Box::new(callback));

        target.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event_name,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

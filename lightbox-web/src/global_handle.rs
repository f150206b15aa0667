//! `window.<name>` handle so inline page markup can drive the viewer
//!
//! Exposes `close()`, `prev()`, `next()` and `open(group, src)` on a plain
//! object. The functions hold a `Weak` reference and do nothing once the
//! viewer is gone; dropping the handle deletes the property again.

use crate::error::LightboxError;
use crate::viewer::{with_inner, ViewerInner};
use lightbox_common::ViewerCommand;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen_x::prelude::*;

pub struct GlobalHandle {
    window: web_sys_x::Window,
    name: String,
    _commands: Vec<Closure<dyn FnMut()>>,
    _open: Closure<dyn FnMut(JsValue, JsValue)>,
}

impl GlobalHandle {
    pub(crate) fn expose(
        window: &web_sys_x::Window,
        name: &str,
        viewer: Weak<RefCell<ViewerInner>>,
    ) -> Result<Self, LightboxError> {
        let object = js_sys_x::Object::new();

        let mut commands = Vec::new();
        for (method, command) in [
            ("close", ViewerCommand::Close),
            ("prev", ViewerCommand::Prev),
            ("next", ViewerCommand::Next),
        ] {
            let weak = viewer.clone();
            let callback: Closure<dyn FnMut()> = Closure::wrap(Box::new(move || {
                with_inner(&weak, |inner| inner.apply(command));
            }));
            js_sys_x::Reflect::set(&object, &method.into(), callback.as_ref())?;
            commands.push(callback);
        }

        let open: Closure<dyn FnMut(JsValue, JsValue)> =
            Closure::wrap(Box::new(move |group: JsValue, source: JsValue| {
                let group = group.as_string().unwrap_or_default();
                let source = source.as_string().unwrap_or_default();
                with_inner(&viewer, |inner| inner.open(&group, &source).map(|_| ()));
            }));
        js_sys_x::Reflect::set(&object, &"open".into(), open.as_ref())?;

        js_sys_x::Reflect::set(window, &name.into(), &object)?;

        Ok(Self {
            window: window.clone(),
            name: name.to_string(),
            _commands: commands,
            _open: open,
        })
    }
}

impl Drop for GlobalHandle {
    fn drop(&mut self) {
        let _ = js_sys_x::Reflect::delete_property(&self.window, &self.name.as_str().into());
    }
}

//! Entry point for plain HTML pages loading the viewer as a wasm module
//!
//! Installs the viewer on module start, so a page only needs the module's
//! `<script>` tag. No tracing subscriber exists here, so failures go to the
//! browser console directly.

use crate::bootstrap::install_from_page;
use wasm_bindgen_x::prelude::*;

#[wasm_bindgen(start, wasm_bindgen = wasm_bindgen_x)]
pub fn start() {
    if let Err(e) = install_from_page() {
        web_sys_x::console::error_1(&format!("instant-lightbox: {e}").into());
    }
}

//! Small helpers over web-sys for looking up and creating elements

use crate::error::LightboxError;
use wasm_bindgen_x::JsCast;

pub fn window() -> Result<web_sys_x::Window, LightboxError> {
    web_sys_x::window().ok_or(LightboxError::NoWindow)
}

pub fn document() -> Result<web_sys_x::Document, LightboxError> {
    window()?.document().ok_or(LightboxError::NoDocument)
}

pub fn body(document: &web_sys_x::Document) -> Result<web_sys_x::HtmlElement, LightboxError> {
    document.body().ok_or(LightboxError::NoBody)
}

/// Create `<tag class="...">` and cast it to the requested element type.
pub fn create_element<T: JsCast>(
    document: &web_sys_x::Document,
    tag: &str,
    class: &str,
) -> Result<T, LightboxError> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| LightboxError::Dom(format!("<{tag}> has an unexpected element type")))
}

/// Set `body.style.overflow`, which suppresses or restores page scrolling
/// behind the overlay.
pub fn set_body_overflow(
    body: &web_sys_x::HtmlElement,
    overflow: &str,
) -> Result<(), LightboxError> {
    body.style().set_property("overflow", overflow)?;
    Ok(())
}

/// Collect the elements of a `NodeList` in document order.
pub fn elements(list: &web_sys_x::NodeList) -> Vec<web_sys_x::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys_x::Element>().ok())
        .collect()
}

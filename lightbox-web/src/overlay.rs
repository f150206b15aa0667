//! The overlay surface: typed handles to every element the viewer updates.

use crate::dom::create_element;
use crate::error::LightboxError;
use lightbox_common::{ClickTarget, GalleryGroup, LightboxConfig, ViewerState};
use wasm_bindgen_x::JsCast;
use web_sys_x::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, Node};

const ROOT_ID: &str = "instantLightbox";
const COUNTER_ID: &str = "lightboxCounter";
const IMAGES_ID: &str = "lightboxImages";
const CAPTION_ID: &str = "lightboxCaption";

/// Overlay elements, created once per viewer
pub struct Overlay {
    pub root: HtmlElement,
    pub content: HtmlElement,
    pub close_button: HtmlElement,
    pub prev_button: HtmlElement,
    pub next_button: HtmlElement,
    pub counter: HtmlElement,
    pub image_host: HtmlElement,
    pub caption: HtmlElement,
    active_class: String,
}

impl Overlay {
    /// Build the overlay tree (not yet attached to the page).
    pub fn build(document: &Document, config: &LightboxConfig) -> Result<Self, LightboxError> {
        let root: HtmlElement = create_element(document, "div", &config.root_class())?;
        root.set_id(ROOT_ID);
        let content: HtmlElement = create_element(document, "div", &config.content_class())?;

        let close_button = control_button(document, &config.close_class(), "\u{00d7}", "Close")?;
        let prev_button =
            control_button(document, &config.prev_class(), "\u{276e}", "Previous image")?;
        let next_button =
            control_button(document, &config.next_class(), "\u{276f}", "Next image")?;

        let counter: HtmlElement = create_element(document, "div", &config.counter_class())?;
        counter.set_id(COUNTER_ID);
        let image_host: HtmlElement = create_element(document, "div", "")?;
        image_host.set_id(IMAGES_ID);
        let caption: HtmlElement = create_element(document, "div", &config.caption_class())?;
        caption.set_id(CAPTION_ID);

        for child in [
            &close_button,
            &prev_button,
            &next_button,
            &counter,
            &image_host,
            &caption,
        ] {
            content.append_child(child)?;
        }
        root.append_child(&content)?;

        Ok(Self {
            root,
            content,
            close_button,
            prev_button,
            next_button,
            counter,
            image_host,
            caption,
            active_class: config.active_class.clone(),
        })
    }

    pub fn mount(&self, body: &HtmlElement) -> Result<(), LightboxError> {
        body.append_child(&self.root)?;
        Ok(())
    }

    pub fn remove(&self) {
        self.root.remove();
    }

    /// Discard the previous images and create one per item.
    ///
    /// Setting `src` starts the browser fetch right away, so the whole group
    /// is preloaded before any of it is shown.
    pub fn replace_images(
        &self,
        document: &Document,
        group: &GalleryGroup,
        image_class: &str,
    ) -> Result<Vec<HtmlImageElement>, LightboxError> {
        self.image_host.set_inner_html("");
        let mut images = Vec::with_capacity(group.len());
        for item in group.items() {
            let img: HtmlImageElement = create_element(document, "img", image_class)?;
            img.set_src(&item.source);
            img.set_alt(&item.caption);
            self.image_host.append_child(&img)?;
            images.push(img);
        }
        Ok(images)
    }

    /// Mirror the viewer state onto the overlay, images, caption and counter.
    pub fn render(
        &self,
        state: &ViewerState,
        images: &[HtmlImageElement],
    ) -> Result<(), LightboxError> {
        for (i, img) in images.iter().enumerate() {
            img.class_list()
                .toggle_with_force(&self.active_class, state.is_active(i))?;
        }

        let caption = state.active_item().map_or("", |item| item.caption.as_str());
        self.caption.set_text_content(Some(caption));
        self.caption
            .style()
            .set_property("display", state.caption_display())?;

        self.counter
            .set_text_content(state.counter_label().as_deref());

        self.root
            .class_list()
            .toggle_with_force(&self.active_class, state.is_open())?;
        Ok(())
    }

    /// Classify what a click inside the overlay landed on.
    pub fn classify(&self, target: Option<&EventTarget>, config: &LightboxConfig) -> ClickTarget {
        let Some(element) = target.and_then(|t| t.dyn_ref::<Element>()) else {
            return ClickTarget::Other;
        };
        if is_same(element, &self.root) {
            return ClickTarget::Backdrop;
        }
        if [&self.close_button, &self.prev_button, &self.next_button]
            .into_iter()
            .any(|button| is_same(element, button))
        {
            return ClickTarget::Control;
        }
        let classes = element.class_list();
        if classes.contains(&config.content_class()) {
            ClickTarget::Content
        } else if classes.contains(&config.image_class()) {
            ClickTarget::Image
        } else {
            ClickTarget::Other
        }
    }
}

fn control_button(
    document: &Document,
    class: &str,
    glyph: &str,
    label: &str,
) -> Result<HtmlElement, LightboxError> {
    let button: HtmlElement = create_element(document, "button", class)?;
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", label)?;
    button.set_text_content(Some(glyph));
    Ok(button)
}

fn is_same(element: &Element, other: &HtmlElement) -> bool {
    let other: &Node = other.as_ref();
    element.is_same_node(Some(other))
}

//! The gallery viewer: one overlay, one state, and the listeners driving it.

use crate::dom;
use crate::error::LightboxError;
use crate::global_handle::GlobalHandle;
use crate::listeners::EventListener;
use crate::markup::{self, BOUND_MARKER};
use crate::overlay::Overlay;
use lightbox_common::{LightboxConfig, ViewerCommand, ViewerState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, error, info, warn};
use wasm_bindgen_x::JsCast;
use web_sys_x::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

/// State shared between the viewer and its listeners.
///
/// Listeners only hold a `Weak` reference, so dropping the owning
/// [`GalleryViewer`] tears everything down.
pub(crate) struct ViewerInner {
    config: LightboxConfig,
    document: Document,
    body: HtmlElement,
    overlay: Overlay,
    state: ViewerState,
    /// Image elements of the current group, same indices as its items
    images: Vec<HtmlImageElement>,
    thumbnails: Vec<BoundLink>,
}

/// A thumbnail link together with its click listener
struct BoundLink {
    element: Element,
    _listener: EventListener,
}

impl BoundLink {
    /// Unmark a link that has left the document so it is rebound if it returns.
    fn unbind_if_detached(&self) -> bool {
        if self.element.is_connected() {
            return false;
        }
        let _ = self.element.remove_attribute(BOUND_MARKER);
        true
    }
}

impl ViewerInner {
    pub(crate) fn open(
        &mut self,
        group_key: &str,
        requested_source: &str,
    ) -> Result<bool, LightboxError> {
        let group = markup::scan_group(&self.document, &self.config, group_key)?;
        if group.is_empty() {
            warn!("Gallery '{}' has no images, not opening", group_key);
            return Ok(false);
        }

        let images =
            self.overlay
                .replace_images(&self.document, &group, &self.config.image_class())?;
        let count = group.len();
        let Some(index) = self.state.open(group, requested_source) else {
            return Ok(false);
        };
        self.images = images;

        self.sync()?;
        debug!("Opened gallery '{}' at {} of {}", group_key, index + 1, count);
        Ok(true)
    }

    fn show_image(&mut self, index: usize) -> Result<bool, LightboxError> {
        if !self.state.show(index) {
            debug!("Ignoring out-of-range image index {}", index);
            return Ok(false);
        }
        self.overlay.render(&self.state, &self.images)?;
        Ok(true)
    }

    fn close(&mut self) -> Result<(), LightboxError> {
        self.state.close();
        self.sync()
    }

    /// Apply the current state to the overlay and the page body.
    fn sync(&mut self) -> Result<(), LightboxError> {
        self.overlay.render(&self.state, &self.images)?;
        if self.config.lock_scroll {
            dom::set_body_overflow(&self.body, self.state.body_overflow())?;
        }
        Ok(())
    }

    pub(crate) fn apply(&mut self, command: ViewerCommand) -> Result<(), LightboxError> {
        match command {
            ViewerCommand::Next | ViewerCommand::Prev => {
                if self.state.apply(command) {
                    self.overlay.render(&self.state, &self.images)?;
                }
                Ok(())
            }
            ViewerCommand::Close => self.close(),
        }
    }

    fn handle_key(&mut self, key: &str) -> Result<(), LightboxError> {
        match self.state.command_for_key(key) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    fn handle_overlay_click(&mut self, target: Option<&EventTarget>) -> Result<(), LightboxError> {
        if self.overlay.classify(target, &self.config).closes_overlay() {
            self.close()?;
        }
        Ok(())
    }
}

/// Run `f` against the viewer if it is still alive and not already borrowed.
pub(crate) fn with_inner(
    weak: &Weak<RefCell<ViewerInner>>,
    f: impl FnOnce(&mut ViewerInner) -> Result<(), LightboxError>,
) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let Ok(mut inner) = inner.try_borrow_mut() else {
        warn!("Gallery viewer is busy, dropping event");
        return;
    };
    if let Err(e) = f(&mut inner) {
        error!("Gallery viewer error: {}", e);
    }
}

/// Image gallery overlay bound to the thumbnail links of the page.
///
/// Created once by the page integration layer (see [`crate::install`]) and
/// kept for the page's lifetime. Dropping it removes the overlay and every
/// listener it registered.
pub struct GalleryViewer {
    inner: Rc<RefCell<ViewerInner>>,
    listeners: Vec<EventListener>,
    global: Option<GlobalHandle>,
}

impl GalleryViewer {
    /// Build the overlay, register keyboard and click listeners, and bind
    /// every thumbnail link currently on the page.
    pub fn initialize(config: LightboxConfig) -> Result<Self, LightboxError> {
        config.validate()?;
        let window = dom::window()?;
        let document = window.document().ok_or(LightboxError::NoDocument)?;
        let body = dom::body(&document)?;

        let overlay = Overlay::build(&document, &config)?;
        overlay.mount(&body)?;

        let root = overlay.root.clone();
        let buttons = [
            (overlay.close_button.clone(), ViewerCommand::Close),
            (overlay.prev_button.clone(), ViewerCommand::Prev),
            (overlay.next_button.clone(), ViewerCommand::Next),
        ];
        let keyboard = config.keyboard;
        let global_name = config.global_handle.clone();

        let inner = Rc::new(RefCell::new(ViewerInner {
            config,
            document: document.clone(),
            body,
            overlay,
            state: ViewerState::new(),
            images: Vec::new(),
            thumbnails: Vec::new(),
        }));

        let mut listeners = Vec::new();

        if keyboard {
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListener::new(&document, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = event.key();
                with_inner(&weak, |inner| inner.handle_key(&key));
            })?);
        }

        let weak = Rc::downgrade(&inner);
        listeners.push(EventListener::new(&root, "click", move |event| {
            let target = event.target();
            with_inner(&weak, |inner| inner.handle_overlay_click(target.as_ref()));
        })?);

        for (button, command) in buttons {
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListener::new(&button, "click", move |_| {
                with_inner(&weak, |inner| inner.apply(command));
            })?);
        }

        let mut viewer = Self {
            inner,
            listeners,
            global: None,
        };

        let bound = viewer.attach_handlers()?;

        if let Some(name) = global_name {
            viewer.global = Some(GlobalHandle::expose(
                &window,
                &name,
                Rc::downgrade(&viewer.inner),
            )?);
        }

        info!("Gallery viewer initialized with {} thumbnail links", bound);
        Ok(viewer)
    }

    /// Bind click handlers to thumbnail links that do not have one yet.
    ///
    /// Listeners of links no longer in the document are dropped first.
    /// Returns how many links were newly bound. Safe to call again after the
    /// page adds or removes links.
    pub fn attach_handlers(&self) -> Result<usize, LightboxError> {
        let links = {
            let mut inner = self.inner.borrow_mut();
            let released = retain_counting(&mut inner.thumbnails, |link| {
                !link.unbind_if_detached()
            });
            if released > 0 {
                debug!("Released {} detached thumbnail links", released);
            }
            markup::find_links(&inner.document, &inner.config, None)?
        };

        let mut bound = Vec::new();
        for link in links {
            if link.element.has_attribute(BOUND_MARKER) {
                continue;
            }
            link.element.set_attribute(BOUND_MARKER, "")?;

            let weak = Rc::downgrade(&self.inner);
            let element = link.element.clone();
            let listener = EventListener::new(&link.element, "click", move |event| {
                event.prevent_default();
                with_inner(&weak, |inner| {
                    // Attributes are read at click time so edits to the link are honored
                    let group = element
                        .get_attribute(&inner.config.gallery_attribute)
                        .unwrap_or_default();
                    let source = element.get_attribute("href").unwrap_or_default();
                    inner.open(&group, &source).map(|_| ())
                });
            })?;
            bound.push(BoundLink {
                element: link.element,
                _listener: listener,
            });
        }

        let count = bound.len();
        self.inner.borrow_mut().thumbnails.extend(bound);
        Ok(count)
    }

    /// Open `group_key` at the image whose URL is `requested_source`.
    ///
    /// Falls back to the first image when the URL is not in the group.
    /// Returns `false` (and stays closed) when the group has no links.
    pub fn open(&self, group_key: &str, requested_source: &str) -> bool {
        self.run(false, |inner| inner.open(group_key, requested_source))
    }

    pub fn show_image(&self, index: usize) -> bool {
        self.run(false, |inner| inner.show_image(index))
    }

    pub fn next(&self) {
        self.run((), |inner| inner.apply(ViewerCommand::Next));
    }

    pub fn prev(&self) {
        self.run((), |inner| inner.apply(ViewerCommand::Prev));
    }

    pub fn close(&self) {
        self.run((), |inner| inner.apply(ViewerCommand::Close));
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().state.is_open()
    }

    pub fn current_index(&self) -> usize {
        self.inner.borrow().state.current_index()
    }

    /// Number of images in the most recently opened group
    pub fn group_len(&self) -> usize {
        self.inner.borrow().state.len()
    }

    fn run<R>(
        &self,
        fallback: R,
        f: impl FnOnce(&mut ViewerInner) -> Result<R, LightboxError>,
    ) -> R {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            warn!("Gallery viewer is busy, ignoring call");
            return fallback;
        };
        match f(&mut inner) {
            Ok(value) => value,
            Err(e) => {
                error!("Gallery viewer error: {}", e);
                fallback
            }
        }
    }
}

/// `Vec::retain` that reports how many items were removed.
fn retain_counting<T>(items: &mut Vec<T>, keep: impl FnMut(&T) -> bool) -> usize {
    let before = items.len();
    items.retain(keep);
    before - items.len()
}

impl Drop for GalleryViewer {
    fn drop(&mut self) {
        self.global.take();
        self.listeners.clear();
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            if inner.state.is_open() && inner.config.lock_scroll {
                let _ = dom::set_body_overflow(&inner.body, "");
            }
            inner.overlay.remove();
            inner.thumbnails.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Tracked<'a> {
        connected: bool,
        dropped: &'a Cell<usize>,
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    #[test]
    fn test_detached_entries_are_released() {
        let dropped = Cell::new(0);
        let mut links: Vec<Tracked> = [true, false, true, false, false]
            .into_iter()
            .map(|connected| Tracked {
                connected,
                dropped: &dropped,
            })
            .collect();

        let released = retain_counting(&mut links, |link| link.connected);

        assert_eq!(released, 3);
        assert_eq!(dropped.get(), 3);
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|link| link.connected));
    }

    #[test]
    fn test_nothing_released_when_all_connected() {
        let mut links = vec![1, 2, 3];
        assert_eq!(retain_counting(&mut links, |_| true), 0);
        assert_eq!(links, vec![1, 2, 3]);
    }
}

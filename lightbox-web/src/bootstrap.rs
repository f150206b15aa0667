//! Page integration: install one viewer for the page once the DOM is ready.
//!
//! The installed viewer lives in a thread-local slot owned by this module
//! for the rest of the page's lifetime.

use crate::dom;
use crate::error::LightboxError;
use crate::listeners::EventListener;
use crate::viewer::GalleryViewer;
use lightbox_common::LightboxConfig;
use std::cell::RefCell;
use tracing::{debug, error, warn};

/// Id of the optional `<script type="application/json">` holding page config
pub const CONFIG_SCRIPT_ID: &str = "instant-lightbox-config";

/// Install progress for the page.
///
/// Moving to `Installed` drops the pending `DOMContentLoaded` listener.
enum InstallSlot<L, V> {
    Idle,
    Pending(L),
    Installed(V),
}

impl<L, V> InstallSlot<L, V> {
    fn installed(&self) -> Option<&V> {
        match self {
            Self::Installed(viewer) => Some(viewer),
            _ => None,
        }
    }

    fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    fn finish(&mut self, viewer: V) {
        *self = Self::Installed(viewer);
    }
}

thread_local! {
    static SLOT: RefCell<InstallSlot<EventListener, GalleryViewer>> =
        const { RefCell::new(InstallSlot::Idle) };
}

/// Install the viewer with `config`, now or on `DOMContentLoaded`.
///
/// Does nothing if a viewer is already installed.
pub fn install(config: LightboxConfig) -> Result<(), LightboxError> {
    config.validate()?;
    install_with(move || Ok(config.clone()))
}

/// Install the viewer with config read from the page's config script.
///
/// A missing script means defaults. An unreadable one is logged and also
/// falls back to defaults rather than leaving the page without a viewer.
pub fn install_from_page() -> Result<(), LightboxError> {
    install_with(|| {
        let document = dom::document()?;
        match page_config(&document) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Ignoring gallery config: {}", e);
                Ok(LightboxConfig::default())
            }
        }
    })
}

/// Run `f` with the installed viewer, if any.
pub fn with_installed<R>(f: impl FnOnce(&GalleryViewer) -> R) -> Option<R> {
    SLOT.with(|slot| slot.borrow().installed().map(f))
}

/// Whether installation must wait for `DOMContentLoaded`.
fn should_defer(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn page_config(document: &web_sys_x::Document) -> Result<LightboxConfig, LightboxError> {
    let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return Ok(LightboxConfig::default());
    };
    let json = script.text_content().unwrap_or_default();
    Ok(LightboxConfig::from_json(&json)?)
}

fn install_with(
    make_config: impl Fn() -> Result<LightboxConfig, LightboxError> + 'static,
) -> Result<(), LightboxError> {
    let document = dom::document()?;
    if !should_defer(&document.ready_state()) {
        return install_now(&make_config);
    }

    if SLOT.with(|slot| slot.borrow().is_pending()) {
        debug!("Gallery viewer install already scheduled");
        return Ok(());
    }
    let listener = EventListener::new(&document, "DOMContentLoaded", move |_| {
        if let Err(e) = install_now(&make_config) {
            error!("Failed to initialize gallery viewer: {}", e);
        }
    })?;
    SLOT.with(|slot| *slot.borrow_mut() = InstallSlot::Pending(listener));
    Ok(())
}

fn install_now(
    make_config: &impl Fn() -> Result<LightboxConfig, LightboxError>,
) -> Result<(), LightboxError> {
    if SLOT.with(|slot| slot.borrow().installed().is_some()) {
        debug!("Gallery viewer already installed");
        return Ok(());
    }
    let viewer = GalleryViewer::initialize(make_config()?)?;
    SLOT.with(|slot| slot.borrow_mut().finish(viewer));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Listener<'a>(&'a Cell<bool>);

    impl Drop for Listener<'_> {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_defers_only_while_loading() {
        assert!(should_defer("loading"));
        assert!(!should_defer("interactive"));
        assert!(!should_defer("complete"));
    }

    #[test]
    fn test_finish_releases_pending_listener() {
        let released = Cell::new(false);
        let mut slot: InstallSlot<Listener, u32> = InstallSlot::Pending(Listener(&released));
        assert!(slot.is_pending());
        assert!(slot.installed().is_none());

        slot.finish(7);

        assert!(released.get());
        assert!(!slot.is_pending());
        assert_eq!(slot.installed(), Some(&7));
    }

    #[test]
    fn test_finish_from_idle() {
        let mut slot: InstallSlot<(), &str> = InstallSlot::Idle;
        assert!(!slot.is_pending());
        slot.finish("viewer");
        assert_eq!(slot.installed(), Some(&"viewer"));
    }
}

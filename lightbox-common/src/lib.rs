//! lightbox-common - Pure gallery model shared by the browser viewer
//!
//! Holds the gallery data types, the open/closed viewer state, and the
//! navigation rules. Nothing in here touches the DOM.

pub mod config;
pub mod gallery;
pub mod navigation;
pub mod viewer_state;

pub use config::{ConfigError, LightboxConfig};
pub use gallery::{GalleryGroup, GalleryItem};
pub use navigation::{wrap_next, wrap_prev, ClickTarget, ViewerCommand};
pub use viewer_state::ViewerState;

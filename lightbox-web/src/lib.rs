//! lightbox-web - Browser side of the gallery viewer
//!
//! Scans the page for thumbnail links, builds the overlay, and wires
//! keyboard and click navigation onto a [`GalleryViewer`].

pub mod bootstrap;
pub mod dom;
pub mod error;
pub mod global_handle;
pub mod listeners;
pub mod markup;
pub mod overlay;
#[cfg(feature = "standalone")]
pub mod standalone;
pub mod viewer;

pub use bootstrap::{install, install_from_page, with_installed, CONFIG_SCRIPT_ID};
pub use error::LightboxError;
pub use lightbox_common::LightboxConfig;
pub use viewer::GalleryViewer;

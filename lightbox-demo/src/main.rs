//! lightbox demo - host page for the gallery viewer
//!
//! Renders thumbnail links with the gallery attributes and installs the
//! viewer once they are in the DOM.

mod fixtures;

use dioxus::prelude::*;
use fixtures::DemoGallery;
use tracing::error;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const LIGHTBOX_CSS: Asset = asset!("/assets/lightbox.css");

#[component]
fn App() -> Element {
    let mut show_archive = use_signal(|| false);

    // Runs after the first render, so the thumbnails already exist
    use_effect(|| {
        if let Err(e) = lightbox_web::install_from_page() {
            error!("Failed to install gallery viewer: {e}");
        }
    });

    // Links rendered later need their click handlers bound too
    use_effect(move || {
        if !show_archive() {
            return;
        }
        match lightbox_web::with_installed(|viewer| viewer.attach_handlers()) {
            Some(Err(e)) => error!("Failed to bind new thumbnails: {e}"),
            Some(Ok(_)) | None => {}
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: LIGHTBOX_CSS }
        main { class: "demo",
            h1 { "Galleries" }
            for gallery in fixtures::galleries() {
                GallerySection { key: "{gallery.key}", gallery: gallery.clone() }
            }
            if show_archive() {
                GallerySection { gallery: fixtures::late_gallery() }
            } else {
                button {
                    class: "demo-button",
                    onclick: move |_| show_archive.set(true),
                    "Show archive"
                }
            }
            button {
                class: "demo-button",
                onclick: move |_| {
                    lightbox_web::with_installed(|viewer| viewer.open("vacation", ""));
                },
                "Open vacation slideshow"
            }
        }
    }
}

#[component]
fn GallerySection(gallery: DemoGallery) -> Element {
    rsx! {
        section { class: "demo-gallery",
            h2 { "{gallery.title}" }
            div { class: "demo-thumbs",
                for photo in gallery.photos.iter() {
                    a {
                        key: "{photo.full_url}",
                        href: "{photo.full_url}",
                        "data-instant-gallery": "{gallery.key}",
                        "data-caption": photo.caption.clone(),
                        img { src: "{photo.thumb_url}", alt: "" }
                    }
                }
            }
        }
    }
}

fn main() {
    dioxus::launch(App);
}

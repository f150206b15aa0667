//! The declarative page contract: which links are thumbnails and what they carry.

use crate::dom;
use crate::error::LightboxError;
use lightbox_common::{GalleryGroup, GalleryItem, LightboxConfig};

/// Attribute set on links that already have a click handler
pub const BOUND_MARKER: &str = "data-lightbox-bound";

/// A thumbnail link read from the page
#[derive(Debug, Clone)]
pub struct ThumbnailLink {
    pub element: web_sys_x::Element,
    pub group: String,
    pub source: String,
    pub caption: Option<String>,
}

impl ThumbnailLink {
    /// Read the gallery attributes off a link. `None` without a group or `href`.
    pub fn read(element: web_sys_x::Element, config: &LightboxConfig) -> Option<Self> {
        let group = element.get_attribute(&config.gallery_attribute)?;
        let source = element.get_attribute("href")?;
        let caption = element.get_attribute(&config.caption_attribute);
        Some(Self {
            element,
            group,
            source,
            caption,
        })
    }

    pub fn to_item(&self) -> GalleryItem {
        GalleryItem::new(self.source.clone(), self.caption.clone())
    }
}

/// CSS selector for every thumbnail link.
///
/// Group keys are compared in Rust (see [`in_group`]) rather than embedded
/// in the selector, so any attribute value matches exactly.
pub fn gallery_selector(attribute: &str) -> String {
    format!("a[{attribute}]")
}

/// Whether a link tagged `link_group` belongs to `group` (`None` = any group).
pub fn in_group(link_group: &str, group: Option<&str>) -> bool {
    group.is_none_or(|group| group == link_group)
}

/// All thumbnail links in document order, optionally for a single group.
pub fn find_links(
    document: &web_sys_x::Document,
    config: &LightboxConfig,
    group: Option<&str>,
) -> Result<Vec<ThumbnailLink>, LightboxError> {
    let list = document.query_selector_all(&gallery_selector(&config.gallery_attribute))?;
    Ok(dom::elements(&list)
        .into_iter()
        .filter_map(|element| ThumbnailLink::read(element, config))
        .filter(|link| in_group(&link.group, group))
        .collect())
}

/// Rebuild a group from the links currently on the page.
pub fn scan_group(
    document: &web_sys_x::Document,
    config: &LightboxConfig,
    key: &str,
) -> Result<GalleryGroup, LightboxError> {
    let items = find_links(document, config, Some(key))?
        .iter()
        .map(ThumbnailLink::to_item)
        .collect();
    Ok(GalleryGroup::with_items(key, items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_for_all_links() {
        assert_eq!(
            gallery_selector("data-instant-gallery"),
            "a[data-instant-gallery]"
        );
    }

    #[test]
    fn test_in_group_exact_match() {
        assert!(in_group("vacation", Some("vacation")));
        assert!(!in_group("vacation", Some("Vacation")));
        assert!(!in_group("vacation-2", Some("vacation")));
        assert!(!in_group("", Some("vacation")));
    }

    #[test]
    fn test_in_group_without_filter() {
        assert!(in_group("vacation", None));
        assert!(in_group("", None));
    }

    #[test]
    fn test_in_group_keys_with_css_special_characters() {
        for key in ["a\x0Cb", "a\u{c}b", "say \"hi\"", "back\\slash", "line\nbreak", "]\"'"] {
            assert!(in_group(key, Some(key)), "key {key:?}");
        }
        assert!(!in_group("a\u{c}b", Some("ab")));
    }
}

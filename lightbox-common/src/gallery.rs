/// A single image in a gallery group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Full-size image URL (the thumbnail link's target)
    pub source: String,
    /// Caption text, empty when the link carries none
    pub caption: String,
}

impl GalleryItem {
    pub fn new(source: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            source: source.into(),
            caption: caption.unwrap_or_default(),
        }
    }

    pub fn has_caption(&self) -> bool {
        !self.caption.is_empty()
    }
}

/// Ordered set of items sharing a group key, in document order.
///
/// Rebuilt from the page every time a gallery is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryGroup {
    key: String,
    items: Vec<GalleryItem>,
}

impl GalleryGroup {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(key: impl Into<String>, items: Vec<GalleryItem>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }

    pub fn push(&mut self, item: GalleryItem) {
        self.items.push(item);
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first item whose source matches exactly.
    pub fn position_of(&self, source: &str) -> Option<usize> {
        self.items.iter().position(|item| item.source == source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_caption_is_empty() {
        let item = GalleryItem::new("a.jpg", None);
        assert_eq!(item.caption, "");
        assert!(!item.has_caption());
    }

    #[test]
    fn test_push_keeps_document_order() {
        let mut group = GalleryGroup::new("vacation");
        group.push(GalleryItem::new("a.jpg", None));
        group.push(GalleryItem::new("b.jpg", None));
        let sources: Vec<_> = group.items().iter().map(|i| i.source.as_str()).collect();
        assert_eq!(sources, vec!["a.jpg", "b.jpg"]);
        assert_eq!(group.key(), "vacation");
    }

    #[test]
    fn test_position_of_first_match() {
        let group = GalleryGroup::with_items(
            "g",
            vec![
                GalleryItem::new("a.jpg", None),
                GalleryItem::new("b.jpg", None),
                GalleryItem::new("b.jpg", Some("dup".into())),
            ],
        );
        assert_eq!(group.position_of("b.jpg"), Some(1));
        assert_eq!(group.position_of("zzz.jpg"), None);
    }
}

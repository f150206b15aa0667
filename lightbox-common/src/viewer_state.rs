use crate::gallery::{GalleryGroup, GalleryItem};
use crate::navigation::{wrap_next, wrap_prev, ViewerCommand};

/// Open/closed state of a gallery viewer and the position within its group.
///
/// Handles open/show/next/prev/close decisions without any I/O. The browser
/// layer mirrors each change onto the overlay.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    group: Option<GalleryGroup>,
    current_index: usize,
    is_open: bool,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a freshly scanned group at the item matching `requested_source`.
    ///
    /// Unknown sources fall back to the first item. An empty group leaves the
    /// state untouched and returns `None`.
    pub fn open(&mut self, group: GalleryGroup, requested_source: &str) -> Option<usize> {
        if group.is_empty() {
            return None;
        }
        let index = group.position_of(requested_source).unwrap_or(0);
        self.group = Some(group);
        self.current_index = index;
        self.is_open = true;
        Some(index)
    }

    /// Make `index` the active item. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Advance one item, wrapping to the first. `None` before any open.
    pub fn next(&mut self) -> Option<usize> {
        let index = wrap_next(self.current_index, self.len())?;
        self.current_index = index;
        Some(index)
    }

    /// Step back one item, wrapping to the last. `None` before any open.
    pub fn prev(&mut self) -> Option<usize> {
        let index = wrap_prev(self.current_index, self.len())?;
        self.current_index = index;
        Some(index)
    }

    /// Hide the viewer. The last group is kept so next/prev stay well defined.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn group(&self) -> Option<&GalleryGroup> {
        self.group.as_ref()
    }

    /// Number of items in the current group (0 before any open).
    pub fn len(&self) -> usize {
        self.group.as_ref().map_or(0, GalleryGroup::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn active_item(&self) -> Option<&GalleryItem> {
        self.group.as_ref()?.get(self.current_index)
    }

    /// "position / total" with a 1-based position.
    pub fn counter_label(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!("{} / {}", self.current_index + 1, self.len()))
    }

    /// Caption is shown only when the active item has a non-empty caption.
    pub fn caption_visible(&self) -> bool {
        self.active_item().is_some_and(GalleryItem::has_caption)
    }

    /// Whether the image at `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current_index && index < self.len()
    }

    /// CSS `display` value for the caption element.
    pub fn caption_display(&self) -> &'static str {
        if self.caption_visible() {
            "block"
        } else {
            "none"
        }
    }

    /// `body.style.overflow` while scroll locking is enabled: hidden while
    /// open, restored to the page default otherwise.
    pub fn body_overflow(&self) -> &'static str {
        if self.is_open {
            "hidden"
        } else {
            ""
        }
    }

    /// Keyboard command for `key`, or `None` while the viewer is closed.
    pub fn command_for_key(&self, key: &str) -> Option<ViewerCommand> {
        if !self.is_open {
            return None;
        }
        ViewerCommand::from_key(key)
    }

    /// Apply a command and return whether the state changed.
    pub fn apply(&mut self, command: ViewerCommand) -> bool {
        match command {
            ViewerCommand::Next => self.next().is_some(),
            ViewerCommand::Prev => self.prev().is_some(),
            ViewerCommand::Close => {
                let was_open = self.is_open;
                self.close();
                was_open
            }
        }
    }
}

//! Navigation rules: wraparound arithmetic, keyboard mapping, and which
//! overlay clicks dismiss the viewer.

/// Index after `index` in a sequence of `len`, wrapping to the start.
///
/// Returns `None` for an empty sequence.
pub fn wrap_next(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((index + 1) % len)
}

/// Index before `index` in a sequence of `len`, wrapping to the end.
pub fn wrap_prev(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((index % len + len - 1) % len)
}

/// Action requested by the user while the overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Next,
    Prev,
    Close,
}

impl ViewerCommand {
    /// Map a `KeyboardEvent.key` value to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// What a click inside the overlay landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay root itself (the dimmed background)
    Backdrop,
    /// The content container around the controls
    Content,
    /// One of the gallery images
    Image,
    /// Close or prev/next buttons
    Control,
    /// Anything else (counter, caption)
    Other,
}

impl ClickTarget {
    pub fn closes_overlay(self) -> bool {
        matches!(self, Self::Backdrop | Self::Content | Self::Image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_next_wraps_at_end() {
        assert_eq!(wrap_next(0, 3), Some(1));
        assert_eq!(wrap_next(2, 3), Some(0));
        assert_eq!(wrap_next(0, 1), Some(0));
    }

    #[test]
    fn test_wrap_prev_wraps_at_start() {
        assert_eq!(wrap_prev(2, 3), Some(1));
        assert_eq!(wrap_prev(0, 3), Some(2));
        assert_eq!(wrap_prev(0, 1), Some(0));
    }

    #[test]
    fn test_wrap_on_empty_sequence() {
        assert_eq!(wrap_next(0, 0), None);
        assert_eq!(wrap_prev(0, 0), None);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(ViewerCommand::from_key("ArrowRight"), Some(ViewerCommand::Next));
        assert_eq!(ViewerCommand::from_key("ArrowLeft"), Some(ViewerCommand::Prev));
        assert_eq!(ViewerCommand::from_key("Escape"), Some(ViewerCommand::Close));
        assert_eq!(ViewerCommand::from_key("Enter"), None);
        assert_eq!(ViewerCommand::from_key("escape"), None);
    }

    #[test]
    fn test_controls_do_not_close() {
        assert!(ClickTarget::Backdrop.closes_overlay());
        assert!(ClickTarget::Content.closes_overlay());
        assert!(ClickTarget::Image.closes_overlay());
        assert!(!ClickTarget::Control.closes_overlay());
        assert!(!ClickTarget::Other.closes_overlay());
    }
}

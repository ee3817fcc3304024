// src/widgets/detail_overlay/state.rs
use ratatui::layout::{Position, Rect};

/// Open detail view for one post record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    pub record_id: String,
    pub scroll: u16,
    /// Content lines after wrapping, as of the last render.
    pub content_height: u16,
    /// Where the overlay was last drawn; clicks outside it close it.
    pub rect: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayIntent {
    ScrollUp,
    ScrollDown,
}

impl DetailOverlay {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            scroll: 0,
            content_height: 0,
            rect: None,
        }
    }

    pub fn apply(&mut self, intent: OverlayIntent) -> bool {
        let before = self.scroll;
        self.scroll = match intent {
            OverlayIntent::ScrollUp => self.scroll.saturating_sub(1),
            OverlayIntent::ScrollDown => (self.scroll + 1).min(self.content_height.saturating_sub(1)),
        };
        before != self.scroll
    }

    /// A click on the backdrop (anywhere outside the drawn overlay).
    pub fn is_backdrop(&self, column: u16, row: u16) -> bool {
        self.rect
            .is_some_and(|rect| !rect.contains(Position::new(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_is_bounded() {
        let mut overlay = DetailOverlay::new("govpublic-0");
        assert!(!overlay.apply(OverlayIntent::ScrollUp));
        overlay.content_height = 2;
        assert!(overlay.apply(OverlayIntent::ScrollDown));
        assert!(!overlay.apply(OverlayIntent::ScrollDown));
        assert_eq!(overlay.scroll, 1);
    }

    #[test]
    fn test_backdrop_hit() {
        let mut overlay = DetailOverlay::new("govpublic-0");
        assert!(!overlay.is_backdrop(0, 0));
        overlay.rect = Some(Rect::new(10, 5, 20, 10));
        assert!(overlay.is_backdrop(0, 0));
        assert!(!overlay.is_backdrop(15, 8));
    }
}

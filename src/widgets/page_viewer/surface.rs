// src/widgets/page_viewer/surface.rs
use std::sync::Arc;

use image::DynamicImage;
use ratatui_image::protocol::StatefulProtocol;

use super::layout::SurfaceLayout;

/// What the drawing surface currently shows.
#[derive(Debug, Clone, Default)]
pub enum SurfaceContent {
    #[default]
    Blank,
    Loading { page_index: usize },
    Ready { page_index: usize, image: Arc<DynamicImage> },
    Failed { page_index: usize, reason: String },
}

impl SurfaceContent {
    /// Settled means the page finished loading, successfully or not.
    pub fn is_settled_for(&self, index: usize) -> bool {
        matches!(
            self,
            SurfaceContent::Ready { page_index, .. } | SurfaceContent::Failed { page_index, .. }
                if *page_index == index
        )
    }
}

/// Key for the terminal protocol built from the current image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintKey {
    pub page_index: usize,
    pub layout: SurfaceLayout,
    pub visible_cells: (u16, u16),
}

/// The encoded image most recently painted, reused while nothing changes.
pub struct PaintedPage {
    pub key: PaintKey,
    pub protocol: StatefulProtocol,
}

// Manual Debug implementation since StatefulProtocol doesn't implement Debug
impl std::fmt::Debug for PaintedPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintedPage")
            .field("key", &self.key)
            .field("protocol", &"<StatefulProtocol>")
            .finish()
    }
}

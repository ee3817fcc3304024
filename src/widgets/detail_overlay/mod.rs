mod state;
mod widget;

pub use state::{DetailOverlay, OverlayIntent};
pub use widget::{centered_rect, DetailOverlayWidget};

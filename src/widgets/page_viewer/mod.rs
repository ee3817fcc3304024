//! Viewer for one pre-rasterized multi-page document.
mod layout;
mod loader;
mod state;
mod surface;
mod widget;

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;

use crate::config::ViewerConfig;
use crate::error::LoadError;
use crate::{log_debug, log_warn};

pub use layout::{display_cells, surface_layout, visible_backing, visible_natural, SurfaceLayout};
pub use loader::{fetch_page, resolve_asset, LoadTicket, PageLoad, PageLoader, ViewerId};
pub use state::{
    Presentation, ViewerEvent, ViewerIntent, ViewerState, ViewerStateMachine, ZoomScale,
};
pub use surface::{PaintKey, PaintedPage, SurfaceContent};
pub use widget::PageViewerWidget;

static NEXT_VIEWER_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct PendingLoad {
    ticket: LoadTicket,
    handle: JoinHandle<()>,
}

/// One mounted document viewer. Only the latest render request may change
/// the surface; dropping the viewer aborts its in-flight load.
#[derive(Debug)]
pub struct PageViewer {
    id: ViewerId,
    record_id: String,
    urls: Vec<String>,
    state: ViewerState,
    density: f64,
    content: SurfaceContent,
    next_token: u64,
    pending: Option<PendingLoad>,
    painted: Option<PaintedPage>,
    loader: PageLoader,
}

impl PageViewer {
    pub fn new(
        record_id: impl Into<String>,
        urls: Vec<String>,
        config: &ViewerConfig,
        loader: PageLoader,
    ) -> Self {
        let state = ViewerState::new(urls.len(), config);
        Self {
            id: ViewerId(NEXT_VIEWER_ID.fetch_add(1, Ordering::Relaxed)),
            record_id: record_id.into(),
            urls,
            state,
            density: config.pixel_density,
            content: SurfaceContent::Blank,
            next_token: 0,
            pending: None,
            painted: None,
            loader,
        }
    }

    pub fn id(&self) -> ViewerId {
        self.id
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn content(&self) -> &SurfaceContent {
        &self.content
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Initial render on mount.
    pub fn mount(&mut self) {
        self.request_render(self.state.page_index);
    }

    pub fn apply(&mut self, intent: ViewerIntent) -> Vec<ViewerEvent> {
        let (state, events) = ViewerStateMachine::transition(self.state.clone(), intent);
        self.state = state;
        for event in &events {
            if let ViewerEvent::RenderRequested { page_index } = event {
                self.request_render(*page_index);
            }
        }
        events
    }

    /// Zoom and presentation changes re-layout the page already on the
    /// surface; only a different page needs a new load.
    fn request_render(&mut self, page_index: usize) {
        if self.content.is_settled_for(page_index) && self.pending.is_none() {
            return;
        }
        if let Some(pending) = &self.pending {
            if pending.ticket.page_index == page_index {
                return;
            }
        }

        self.next_token += 1;
        let ticket = LoadTicket {
            viewer: self.id,
            token: self.next_token,
            page_index,
        };

        if let Some(stale) = self.pending.take() {
            log_debug!(
                "Viewer {} superseded token {} with {}",
                self.record_id,
                stale.ticket.token,
                ticket.token
            );
            stale.handle.abort();
        }

        self.painted = None;
        match self.urls.get(page_index) {
            Some(url) => {
                self.content = SurfaceContent::Loading { page_index };
                let handle = self.loader.spawn(ticket, url.clone());
                self.pending = Some(PendingLoad { ticket, handle });
            }
            None => {
                self.content = SurfaceContent::Failed {
                    page_index,
                    reason: LoadError::NoSuchPage(page_index).to_string(),
                };
            }
        }
    }

    /// Apply a finished load. Returns false when the result was discarded
    /// because a newer request superseded it.
    pub fn on_loaded(&mut self, load: PageLoad) -> bool {
        let current = match &self.pending {
            Some(pending) => pending.ticket,
            None => return false,
        };
        if load.ticket != current || load.ticket.page_index != self.state.page_index {
            log_debug!(
                "Viewer {} dropped stale load token {} (current {})",
                self.record_id,
                load.ticket.token,
                current.token
            );
            return false;
        }

        self.pending = None;
        self.painted = None;
        let page_index = load.ticket.page_index;
        self.content = match load.result {
            Ok(image) => SurfaceContent::Ready { page_index, image },
            Err(err) => {
                log_warn!("Viewer {} page {} failed: {}", self.record_id, page_index + 1, err);
                SurfaceContent::Failed {
                    page_index,
                    reason: err.to_string(),
                }
            }
        };
        true
    }

    pub(crate) fn painted_mut(&mut self) -> &mut Option<PaintedPage> {
        &mut self.painted
    }

    #[cfg(test)]
    pub(crate) fn pending_ticket(&self) -> Option<LoadTicket> {
        self.pending.as_ref().map(|pending| pending.ticket)
    }
}

impl Drop for PageViewer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}

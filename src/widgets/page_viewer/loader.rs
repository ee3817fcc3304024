// src/widgets/page_viewer/loader.rs
//! Asynchronous page image loading. Results are posted back to the event
//! loop tagged with the ticket they were issued for.
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use image::DynamicImage;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::LoadError;
use crate::event::{AppEvent, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewerId(pub u64);

/// Identifies one render request. Tokens increase monotonically per viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub viewer: ViewerId,
    pub token: u64,
    pub page_index: usize,
}

#[derive(Debug, Clone)]
pub struct PageLoad {
    pub ticket: LoadTicket,
    pub result: Result<Arc<DynamicImage>, LoadError>,
}

#[derive(Debug, Clone)]
pub struct PageLoader {
    client: reqwest::Client,
    asset_root: Arc<PathBuf>,
    sender: mpsc::UnboundedSender<Event>,
}

impl PageLoader {
    pub fn new(asset_root: impl Into<PathBuf>, sender: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            client: reqwest::Client::new(),
            asset_root: Arc::new(asset_root.into()),
            sender,
        }
    }

    pub fn spawn(&self, ticket: LoadTicket, url: String) -> JoinHandle<()> {
        let client = self.client.clone();
        let asset_root = self.asset_root.clone();
        let sender = self.sender.clone();

        tokio::spawn(async move {
            tracing::debug!(viewer = ticket.viewer.0, token = ticket.token, %url, "loading page");
            let result = fetch_page(&client, &asset_root, &url).await.map(Arc::new);
            if let Err(err) = &result {
                tracing::warn!(%url, error = %err, "page load failed");
            }
            let _ = sender.send(Event::App(AppEvent::PageLoaded(PageLoad { ticket, result })));
        })
    }
}

/// Fetch and decode one page image. `http(s)` URLs go over the network,
/// anything else is a path under the asset root.
pub async fn fetch_page(
    client: &reqwest::Client,
    asset_root: &Path,
    url: &str,
) -> Result<DynamicImage, LoadError> {
    let bytes = if url.starts_with("http://") || url.starts_with("https://") {
        let response = client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LoadError::Fetch(e.to_string()))?;
        response
            .bytes()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?
            .to_vec()
    } else {
        let path = resolve_asset(asset_root, url)
            .ok_or_else(|| LoadError::Read(format!("{url}: path escapes asset root")))?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| LoadError::Read(format!("{}: {}", path.display(), e)))?
    };

    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|_| LoadError::Aborted)?
        .map_err(|e| LoadError::Decode(e.to_string()))
}

/// Web-root style paths (`/assets/x.png`) resolve under `asset_root`.
/// Parent components are rejected.
pub fn resolve_asset(asset_root: &Path, url: &str) -> Option<PathBuf> {
    let relative = Path::new(url.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }
    Some(asset_root.join(relative))
}

//! Feed aggregation: typed records from heterogeneous JSON sources, merged
//! in source order and sliced into pages.
mod combine;
mod format;
mod paginate;
pub mod source;

use serde::{Deserialize, Serialize};

pub use combine::combine;
pub use format::{format_details, html_to_text, sanitize_text};
pub use paginate::{page_window, paginate, total_pages, FeedPage};
pub use source::{load_sources, Collection, NamedCollection, PdfMetadata, RawPost};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Pdf,
    Post,
}

/// One listing entry. `id` is `{source_name}-{index}` and unique in a feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRecord {
    pub id: String,
    #[serde(flatten)]
    pub body: RecordBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordBody {
    Pdf(PdfRecord),
    Post(PostRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfRecord {
    pub page_image_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    pub logo_url: Option<String>,
    /// Body text, converted from the source's HTML fragment at ingestion.
    pub summary: Option<String>,
    pub apply_url: Option<String>,
    pub source_url: Option<String>,
    /// Set when the body is an embedded external document.
    pub external_doc_urls: Option<Vec<String>>,
}

impl FeedRecord {
    pub fn kind(&self) -> RecordKind {
        match &self.body {
            RecordBody::Pdf(_) => RecordKind::Pdf,
            RecordBody::Post(_) => RecordKind::Post,
        }
    }

    pub fn as_pdf(&self) -> Option<&PdfRecord> {
        match &self.body {
            RecordBody::Pdf(pdf) => Some(pdf),
            RecordBody::Post(_) => None,
        }
    }

    pub fn as_post(&self) -> Option<&PostRecord> {
        match &self.body {
            RecordBody::Post(post) => Some(post),
            RecordBody::Pdf(_) => None,
        }
    }
}

impl PostRecord {
    /// True when the body is carried by external document embeds rather than text.
    pub fn is_embed_only(&self) -> bool {
        self.summary.is_none() && self.has_embeds()
    }

    pub fn has_embeds(&self) -> bool {
        self.external_doc_urls
            .as_ref()
            .is_some_and(|urls| !urls.is_empty())
    }

    pub fn has_body(&self) -> bool {
        self.summary.is_some() || self.has_embeds()
    }
}

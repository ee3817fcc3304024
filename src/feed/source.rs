// src/feed/source.rs
//! Raw data sources as they come out of the bundled JSON files.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::config::{SourceConfig, SourceKind};
use crate::error::FeedError;
use crate::{log_debug, log_info};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PdfMetadata {
    pub images: Vec<String>,
}

/// A post as found in a `blogPosts` array. Each source names its fields a
/// little differently, so most fields have an alternative spelling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPost {
    pub title: Option<String>,
    pub job_title: Option<String>,
    pub img_src: Option<String>,
    pub icon_link: Option<String>,
    pub details: Option<TextOrLines>,
    pub content: Option<TextOrLines>,
    pub apply: Option<String>,
    pub href: Option<String>,
    pub iframe: Option<OneOrMany>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextOrLines {
    Text(String),
    Lines(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(url) => vec![url],
            OneOrMany::Many(urls) => urls,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    PdfMetadata(Vec<PdfMetadata>),
    PdfUrls(Vec<String>),
    BlogPosts(Vec<RawPost>),
}

impl Collection {
    pub fn len(&self) -> usize {
        match self {
            Collection::PdfMetadata(items) => items.len(),
            Collection::PdfUrls(items) => items.len(),
            Collection::BlogPosts(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCollection {
    pub name: String,
    pub collection: Collection,
}

impl NamedCollection {
    pub fn new(name: impl Into<String>, collection: Collection) -> Self {
        Self {
            name: name.into(),
            collection,
        }
    }

    /// Shape a parsed JSON document into a collection of the given kind.
    /// Anything that does not match the expected shape is rejected.
    pub fn from_value(
        name: impl Into<String>,
        kind: SourceKind,
        value: Value,
    ) -> Result<Self, FeedError> {
        let name = name.into();
        let malformed = |reason: String| FeedError::Malformed {
            source_name: name.clone(),
            reason,
        };

        let collection = match kind {
            SourceKind::PdfImages => {
                if !value.is_array() {
                    return Err(malformed("expected an array of { images: [..] }".into()));
                }
                let items: Vec<PdfMetadata> =
                    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
                Collection::PdfMetadata(items)
            }
            SourceKind::PdfUrls => {
                let urls = take_field(value, "pdfUrls").ok_or_else(|| {
                    malformed("missing 'pdfUrls' array".into())
                })?;
                let urls: Vec<String> =
                    serde_json::from_value(urls).map_err(|e| malformed(e.to_string()))?;
                Collection::PdfUrls(urls)
            }
            SourceKind::BlogPosts => {
                let posts = take_field(value, "blogPosts").ok_or_else(|| {
                    malformed("missing 'blogPosts' array".into())
                })?;
                let posts: Vec<RawPost> =
                    serde_json::from_value(posts).map_err(|e| malformed(e.to_string()))?;
                Collection::BlogPosts(posts)
            }
        };

        Ok(Self { name, collection })
    }
}

fn take_field(value: Value, field: &str) -> Option<Value> {
    match value {
        Value::Object(mut map) => map.remove(field).filter(Value::is_array),
        _ => None,
    }
}

/// Read every configured source from disk, in configuration order.
pub fn load_sources(
    asset_root: &Path,
    sources: &[SourceConfig],
) -> Result<Vec<NamedCollection>, FeedError> {
    sources
        .iter()
        .map(|source| {
            let path = resolve_path(asset_root, &source.path);
            let text = fs::read_to_string(&path).map_err(|e| FeedError::Io {
                path: path.clone(),
                source: e,
            })?;
            let value: Value = serde_json::from_str(&text).map_err(|e| FeedError::Json {
                path: path.clone(),
                source: e,
            })?;
            let named = NamedCollection::from_value(source.name.clone(), source.kind, value)?;
            log_debug!(
                "Loaded source '{}' from {:?}: {} items",
                named.name,
                path,
                named.collection.len()
            );
            Ok(named)
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect(|loaded| log_info!("Loaded {} sources", loaded.len()))
}

fn resolve_path(asset_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        asset_root.join(path)
    }
}

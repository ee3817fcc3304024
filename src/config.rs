// src/config.rs
//! Application configuration, read from a YAML file.
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::routes::normalize;

pub const DEFAULT_CONFIG_PATH: &str = "./job_board.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base directory for relative JSON and image paths.
    pub asset_root: PathBuf,
    pub page_size: usize,
    pub views: Vec<ViewConfig>,
    pub viewer: ViewerConfig,
    pub timers: TimerConfig,
    pub embeds: EmbedPolicy,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub kind: SourceKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// `[{ "images": [..] }, ..]`
    PdfImages,
    /// `{ "pdfUrls": [..] }`
    PdfUrls,
    /// `{ "blogPosts": [..] }`
    BlogPosts,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_step: f64,
    pub zoom_default: f64,
    /// Backing pixels per layout pixel.
    pub pixel_density: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.5,
            zoom_max: 3.0,
            zoom_step: 0.25,
            zoom_default: 1.0,
            pixel_density: 1.0,
        }
    }
}

impl ViewerConfig {
    /// Number of whole zoom steps between `zoom_min` and `zoom_max`.
    pub fn zoom_levels(&self) -> u32 {
        whole_steps(self.zoom_max - self.zoom_min, self.zoom_step).unwrap_or(0)
    }

    pub fn default_zoom_level(&self) -> u32 {
        whole_steps(self.zoom_default - self.zoom_min, self.zoom_step).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub pdf_placeholder_ms: u64,
    pub redirect_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            pdf_placeholder_ms: 5000,
            redirect_ms: 3000,
        }
    }
}

/// How posts that embed external documents behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedPolicy {
    /// Allow stepping through every embed URL of a post, not just the first.
    pub paginate_multi_url: bool,
    /// Allow opening the detail overlay for embed-only posts.
    pub detail_for_embeds: bool,
}

impl Default for EmbedPolicy {
    fn default() -> Self {
        Self {
            paginate_multi_url: true,
            detail_for_embeds: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub debug: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./logs"),
            debug: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("./assets"),
            page_size: 6,
            views: vec![
                ViewConfig {
                    path: "/".to_string(),
                    title: "Home".to_string(),
                    sources: vec![SourceConfig {
                        name: "pdf".to_string(),
                        kind: SourceKind::PdfImages,
                        path: PathBuf::from("pdf_images/metadata.json"),
                    }],
                },
                ViewConfig {
                    path: "/vacancies".to_string(),
                    title: "Vacancies".to_string(),
                    sources: [
                        ("pdf", SourceKind::PdfUrls, "pdfs/pdfUrls.json"),
                        ("minopex", SourceKind::BlogPosts, "private/minopex.json"),
                        ("sayouth", SourceKind::BlogPosts, "private/SA-Youth.json"),
                        ("propersonnel", SourceKind::BlogPosts, "private/Pro-Personnel.json"),
                        ("govpublic", SourceKind::BlogPosts, "public/govpage-public-sector.json"),
                        ("govprivate", SourceKind::BlogPosts, "public/govpage-private-sector.json"),
                    ]
                    .into_iter()
                    .map(|(name, kind, path)| SourceConfig {
                        name: name.to_string(),
                        kind,
                        path: PathBuf::from(path),
                    })
                    .collect(),
                },
            ],
            viewer: ViewerConfig::default(),
            timers: TimerConfig::default(),
            embeds: EmbedPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields the built-in defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match fs::read_to_string(path) {
            Ok(text) => Self::from_yaml(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be greater than 0".into()));
        }

        let v = &self.viewer;
        if !(v.zoom_min > 0.0) {
            return Err(ConfigError::Invalid("viewer.zoom_min must be positive".into()));
        }
        if !(v.zoom_step > 0.0) {
            return Err(ConfigError::Invalid("viewer.zoom_step must be positive".into()));
        }
        if !(v.zoom_min <= v.zoom_default && v.zoom_default <= v.zoom_max) {
            return Err(ConfigError::Invalid(format!(
                "viewer.zoom_default {} outside [{}, {}]",
                v.zoom_default, v.zoom_min, v.zoom_max
            )));
        }
        if whole_steps(v.zoom_max - v.zoom_min, v.zoom_step).is_none()
            || whole_steps(v.zoom_default - v.zoom_min, v.zoom_step).is_none()
        {
            return Err(ConfigError::Invalid(
                "viewer zoom range must be a whole number of zoom_step".into(),
            ));
        }
        if !(v.pixel_density > 0.0) {
            return Err(ConfigError::Invalid("viewer.pixel_density must be positive".into()));
        }

        if self.views.is_empty() {
            return Err(ConfigError::Invalid("at least one view is required".into()));
        }
        let mut seen = HashSet::new();
        for view in &self.views {
            if !view.path.starts_with('/') {
                return Err(ConfigError::Invalid(format!(
                    "view path '{}' must start with '/'",
                    view.path
                )));
            }
            if !seen.insert(view.path.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate view path '{}'", view.path)));
            }
            // Record ids are `{source}-{index}`, so names must not repeat.
            let mut names = HashSet::new();
            for source in &view.sources {
                if !names.insert(source.name.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "duplicate source name '{}' in view '{}'",
                        source.name, view.path
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn view(&self, path: &str) -> Option<&ViewConfig> {
        let path = normalize(path);
        self.views.iter().find(|v| normalize(&v.path) == path)
    }
}

fn whole_steps(span: f64, step: f64) -> Option<u32> {
    let steps = span / step;
    let rounded = steps.round();
    if rounded < 0.0 || (steps - rounded).abs() > 1e-6 {
        None
    } else {
        Some(rounded as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.viewer.zoom_levels(), 10);
        assert_eq!(config.viewer.default_zoom_level(), 2);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
asset_root: "./data"
page_size: 4
views:
  - path: "/"
    title: "Home"
    sources:
      - name: "pdf"
        kind: pdf_images
        path: "pdf_images/metadata.json"
  - path: "/vacancies"
    title: "Vacancies"
    sources:
      - name: "minopex"
        kind: blog_posts
        path: "private/minopex.json"
embeds:
  paginate_multi_url: false
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.views[1].sources[0].kind, SourceKind::BlogPosts);
        assert!(!config.embeds.paginate_multi_url);
        assert!(!config.embeds.detail_for_embeds);
        assert_eq!(config.timers.redirect_ms, 3000);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = AppConfig::from_yaml("page_size: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_uneven_zoom_range_rejected() {
        let yaml = r#"
viewer:
  zoom_min: 0.5
  zoom_max: 3.1
  zoom_step: 0.25
  zoom_default: 1.0
"#;
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_duplicate_view_paths_rejected() {
        let yaml = r#"
views:
  - path: "/"
    title: "A"
  - path: "/"
    title: "B"
"#;
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_duplicate_source_names_rejected() {
        let yaml = r#"
views:
  - path: "/"
    title: "Home"
    sources:
      - name: "pdf"
        kind: pdf_images
        path: "a/metadata.json"
      - name: "pdf"
        kind: pdf_images
        path: "b/metadata.json"
"#;
        match AppConfig::from_yaml(yaml) {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("duplicate source name 'pdf'")),
            other => panic!("expected invalid config, got {:?}", other),
        }
    }

    #[test]
    fn test_same_source_name_in_other_view_allowed() {
        let yaml = r#"
views:
  - path: "/"
    title: "Home"
    sources:
      - name: "pdf"
        kind: pdf_images
        path: "a/metadata.json"
  - path: "/vacancies"
    title: "Vacancies"
    sources:
      - name: "pdf"
        kind: pdf_urls
        path: "b/pdfUrls.json"
"#;
        assert!(AppConfig::from_yaml(yaml).is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load("./definitely/not/here.yml").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}

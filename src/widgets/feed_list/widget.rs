// src/widgets/feed_list/widget.rs
use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use ratatui_image::picker::Picker;
use throbber_widgets_tui::ThrobberState;

use crate::feed::{FeedRecord, RecordBody};
use crate::ui::style::dim_unless_focused;
use crate::widgets::doc_embed::{DocEmbedWidget, EmbedState};
use crate::widgets::page_viewer::{PageViewer, PageViewerWidget};

use super::card::{PostCard, PREVIEW_LINES};

const PDF_CARD_HEIGHT: u16 = 20;
const EMBED_CARD_HEIGHT: u16 = 6;

/// Rows a record's card takes in the list.
pub fn card_height(record: &FeedRecord) -> u16 {
    match &record.body {
        RecordBody::Pdf(_) => PDF_CARD_HEIGHT,
        RecordBody::Post(post) if post.is_embed_only() => EMBED_CARD_HEIGHT,
        RecordBody::Post(post) => {
            let logo = u16::from(post.logo_url.is_some());
            // borders + hints + preview
            3 + logo + PREVIEW_LINES as u16
        }
    }
}

/// First card to draw so that `selected` is fully visible in `height` rows.
fn first_visible(records: &[FeedRecord], selected: usize, height: u16) -> usize {
    let mut used = 0u16;
    let mut start = selected.min(records.len().saturating_sub(1));
    for index in (0..=start).rev() {
        used = used.saturating_add(card_height(&records[index]));
        if used > height && index != selected {
            break;
        }
        start = index;
    }
    start
}

/// The cards of one feed page, dispatching on record kind.
pub struct FeedListWidget<'a> {
    pub records: &'a [FeedRecord],
    pub selected: Option<usize>,
    pub viewers: &'a mut HashMap<String, PageViewer>,
    pub embeds: &'a HashMap<String, EmbedState>,
    pub picker: &'a Picker,
    pub throbber: &'a ThrobberState,
    /// Documents are still behind the content-ready placeholder.
    pub placeholder: bool,
}

impl FeedListWidget<'_> {
    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if self.records.is_empty() {
            return;
        }
        let start = first_visible(self.records, self.selected.unwrap_or(0), area.height);

        let mut y = area.y;
        let bottom = area.y + area.height;
        for (index, record) in self.records.iter().enumerate().skip(start) {
            if y >= bottom {
                break;
            }
            let height = card_height(record).min(bottom - y);
            let card_area = Rect::new(area.x, y, area.width, height);
            let focused = self.selected == Some(index);

            match &record.body {
                RecordBody::Pdf(_) => {
                    if let Some(viewer) = self.viewers.get_mut(&record.id) {
                        // The full view owns the paint cache while expanded.
                        if viewer.state().is_expanded() {
                            expanded_stub(focused).render(card_area, buf);
                            y += height;
                            continue;
                        }
                        PageViewerWidget::new(self.picker, self.throbber)
                            .focused(focused)
                            .placeholder(self.placeholder)
                            .render(viewer, card_area, buf);
                    }
                }
                RecordBody::Post(post) => match (&post.external_doc_urls, self.embeds.get(&record.id)) {
                    (Some(urls), Some(embed)) if post.is_embed_only() => {
                        DocEmbedWidget::new(&post.title, urls)
                            .focused(focused)
                            .render(embed, card_area, buf);
                    }
                    _ => PostCard::new(post).focused(focused).render(card_area, buf),
                },
            }
            y += height;
        }
    }
}

fn expanded_stub(focused: bool) -> Paragraph<'static> {
    let style = dim_unless_focused(focused, Style::default().fg(Color::Yellow));
    Paragraph::new(Line::from(Span::styled("Open in full view  [f] close", style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{PdfRecord, PostRecord};

    fn post(id: &str) -> FeedRecord {
        FeedRecord {
            id: id.to_string(),
            body: RecordBody::Post(PostRecord {
                title: id.to_string(),
                summary: Some("body".into()),
                ..PostRecord::default()
            }),
        }
    }

    fn pdf(id: &str) -> FeedRecord {
        FeedRecord {
            id: id.to_string(),
            body: RecordBody::Pdf(PdfRecord {
                page_image_urls: vec!["/a.png".into()],
            }),
        }
    }

    #[test]
    fn test_first_visible_keeps_selection_on_screen() {
        let records = vec![pdf("a"), post("b"), post("c"), post("d")];
        assert_eq!(first_visible(&records, 0, 30), 0);
        // post cards are 6 rows; three fit in 20 rows, the pdf card does not
        assert_eq!(first_visible(&records, 3, 20), 1);
        assert_eq!(first_visible(&records, 1, 10), 1);
    }

    #[test]
    fn test_renders_posts() {
        let records = vec![post("first"), post("second")];
        let mut viewers = HashMap::new();
        let embeds = HashMap::new();
        let picker = Picker::from_fontsize((8, 16));
        let throbber = ThrobberState::default();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        FeedListWidget {
            records: &records,
            selected: Some(1),
            viewers: &mut viewers,
            embeds: &embeds,
            picker: &picker,
            throbber: &throbber,
            placeholder: false,
        }
        .render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("first"));
        assert!(text.contains("second"));
    }

    #[tokio::test]
    async fn test_expanded_viewer_keeps_full_view_paint() {
        use std::sync::Arc;

        use image::DynamicImage;
        use tokio::sync::mpsc;

        use crate::config::ViewerConfig;
        use crate::widgets::page_viewer::{PageLoad, PageLoader, ViewerIntent};

        let (tx, _rx) = mpsc::unbounded_channel();
        let loader = PageLoader::new("/nonexistent-root", tx);
        let mut viewer =
            PageViewer::new("pdf-0", vec!["/a.png".into()], &ViewerConfig::default(), loader);
        viewer.mount();
        let ticket = viewer.pending_ticket().expect("pending load");
        assert!(viewer.on_loaded(PageLoad {
            ticket,
            result: Ok(Arc::new(DynamicImage::new_rgba8(160, 220))),
        }));
        viewer.apply(ViewerIntent::Expand);

        let records = vec![pdf("pdf-0")];
        let mut viewers = HashMap::from([("pdf-0".to_string(), viewer)]);
        let embeds = HashMap::new();
        let picker = Picker::from_fontsize((8, 16));
        let throbber = ThrobberState::default();
        let screen = Rect::new(0, 0, 80, 40);
        let list_area = Rect::new(0, 3, 80, 20);

        let mut painted_key = None;
        for _ in 0..2 {
            let mut buf = Buffer::empty(screen);
            FeedListWidget {
                records: &records,
                selected: Some(0),
                viewers: &mut viewers,
                embeds: &embeds,
                picker: &picker,
                throbber: &throbber,
                placeholder: false,
            }
            .render(list_area, &mut buf);

            let viewer = viewers.get_mut("pdf-0").expect("viewer");
            // The list pass leaves the cache from the previous full view alone.
            assert_eq!(viewer.painted_mut().as_ref().map(|p| p.key), painted_key);

            PageViewerWidget::new(&picker, &throbber)
                .focused(true)
                .render(viewer, screen, &mut buf);
            let key = viewer.painted_mut().as_ref().map(|p| p.key);
            assert!(key.is_some());
            if painted_key.is_some() {
                assert_eq!(key, painted_key);
            }
            painted_key = key;
        }
    }
}

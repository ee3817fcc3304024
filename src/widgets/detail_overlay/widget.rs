// src/widgets/detail_overlay/widget.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::feed::PostRecord;
use crate::widgets::doc_embed::{DocEmbedWidget, EmbedState};

use super::DetailOverlay;

const EMBED_PANEL_HEIGHT: u16 = 6;

pub struct DetailOverlayWidget<'a> {
    post: &'a PostRecord,
    embed: Option<&'a EmbedState>,
}

impl<'a> DetailOverlayWidget<'a> {
    pub fn new(post: &'a PostRecord) -> Self {
        Self { post, embed: None }
    }

    /// Show the post's embedded documents below the body.
    pub fn embed(mut self, embed: Option<&'a EmbedState>) -> Self {
        self.embed = embed;
        self
    }

    pub fn render(self, overlay: &mut DetailOverlay, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(80, 80, area);
        Clear.render(popup_area, buf);
        overlay.rect = Some(popup_area);

        let block = Block::bordered()
            .title(format!(" {} ", self.post.title))
            .title_bottom(Line::from(" ↑↓ scroll · Esc/x close ").centered())
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        block.render(popup_area, buf);

        let inner = popup_area.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        let [header_area, body_area, actions_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        let logo = match &self.post.logo_url {
            Some(url) => Line::from(vec![
                Span::styled("Logo: ", Style::default().fg(Color::DarkGray)),
                Span::styled(url.clone(), Style::default().fg(Color::Blue)),
            ]),
            None => Line::default(),
        };
        Paragraph::new(logo).render(header_area, buf);

        let body_area = match (self.embed, &self.post.external_doc_urls) {
            (Some(embed), Some(urls)) if body_area.height > EMBED_PANEL_HEIGHT => {
                let [text_area, embed_area] = Layout::vertical([
                    Constraint::Min(1),
                    Constraint::Length(EMBED_PANEL_HEIGHT),
                ])
                .areas(body_area);
                DocEmbedWidget::new("Attached documents", urls)
                    .focused(true)
                    .render(embed, embed_area, buf);
                text_area
            }
            _ => body_area,
        };

        let body = self
            .post
            .summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("No details provided.");
        overlay.content_height = wrapped_height(body, body_area.width);
        overlay.scroll = overlay.scroll.min(overlay.content_height.saturating_sub(1));
        Paragraph::new(body)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((overlay.scroll, 0))
            .render(body_area, buf);

        let action = |key: &str, label: &str, target: &Option<String>| -> Vec<Span<'static>> {
            let style = if target.is_some() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            };
            vec![Span::styled(format!("[{key}] {label}"), style), Span::raw("    ")]
        };
        let mut spans = action("a", "Apply", &self.post.apply_url);
        spans.extend(action("s", "Original Source", &self.post.source_url));
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(actions_area, buf);
    }
}

/// Rows `text` occupies when wrapped at `width`. Approximates word wrapping
/// by character count, which is enough to bound scrolling.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

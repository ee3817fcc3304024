// src/widgets/feed_list/card.rs
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::feed::PostRecord;
use crate::ui::style::dim_unless_focused;

/// Summary lines shown on a collapsed card.
pub const PREVIEW_LINES: usize = 3;

/// Listing card for a text post.
pub struct PostCard<'a> {
    post: &'a PostRecord,
    focused: bool,
}

impl<'a> PostCard<'a> {
    pub fn new(post: &'a PostRecord) -> Self {
        Self {
            post,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(dim_unless_focused(self.focused, Style::default().fg(Color::Green)))
            .title(Span::styled(
                format!(" {} ", self.post.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));

        let muted = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::new();
        if let Some(logo) = &self.post.logo_url {
            lines.push(Line::from(Span::styled(format!("🏢 {logo}"), muted)));
        }
        match &self.post.summary {
            Some(summary) => lines.extend(
                summary
                    .lines()
                    .filter(|l| !l.trim().is_empty())
                    .take(PREVIEW_LINES)
                    .map(|l| Line::from(l.to_string())),
            ),
            None => lines.push(Line::from(Span::styled("No details provided.", muted))),
        }

        let mut hints = vec![Span::styled("[Enter] details", muted)];
        if self.post.apply_url.is_some() {
            hints.push(Span::raw("  "));
            hints.push(Span::styled("[a] apply", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(hints));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

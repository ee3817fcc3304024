// src/widgets/doc_embed/widget.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::style::{dim_unless_focused, enabled_style};

use super::EmbedState;

/// Panel for a post whose body is an external document. The terminal cannot
/// frame the page, so the panel shows where it lives and how to open it.
pub struct DocEmbedWidget<'a> {
    title: &'a str,
    urls: &'a [String],
    focused: bool,
}

impl<'a> DocEmbedWidget<'a> {
    pub fn new(title: &'a str, urls: &'a [String]) -> Self {
        Self {
            title,
            urls,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(self, state: &EmbedState, area: Rect, buf: &mut Buffer) {
        let accent = if state.full_screen { Color::Yellow } else { Color::Magenta };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(dim_unless_focused(self.focused, Style::default().fg(accent)))
            .title(format!(" 🔗 {} ", self.title));

        let base = dim_unless_focused(self.focused, Style::default().fg(Color::Gray));
        let url = state.current(self.urls).unwrap_or("(no document)");

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Document {} of {}", (state.index + 1).min(state.count.max(1)), state.count.max(1)),
                base.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(url.to_string(), Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED))),
            Line::default(),
        ];

        let mut controls = vec![Span::styled("[o] open in browser", base)];
        if state.count > 1 {
            controls.push(Span::raw("   "));
            controls.push(Span::styled("< Prev", enabled_style(state.has_previous(), base)));
            controls.push(Span::raw("  "));
            controls.push(Span::styled("Next >", enabled_style(state.has_next(), base)));
        }
        controls.push(Span::raw("   "));
        controls.push(Span::styled(
            if state.full_screen { "[f] close" } else { "[f] full view" },
            base,
        ));
        lines.push(Line::from(controls));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmbedPolicy;

    #[test]
    fn test_shows_current_url_and_position() {
        let urls = vec!["https://docs.example/one".to_string(), "https://docs.example/two".to_string()];
        let state = EmbedState {
            index: 1,
            ..EmbedState::new(urls.len(), &EmbedPolicy::default())
        };
        let area = Rect::new(0, 0, 60, 7);
        let mut buf = Buffer::empty(area);
        DocEmbedWidget::new("Gov listing", &urls).render(&state, area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Document 2 of 2"));
        assert!(text.contains("https://docs.example/two"));
    }
}

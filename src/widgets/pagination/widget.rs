// src/widgets/pagination/widget.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::feed::page_window;
use crate::ui::style::enabled_style;

use super::PaginationState;

#[derive(Debug, Default)]
pub struct PaginationWidget;

impl PaginationWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, state: &PaginationState, area: Rect, buf: &mut Buffer) {
        let base = Style::default().fg(Color::Gray);
        let mut spans = vec![
            Span::styled("← Previous", enabled_style(state.previous_enabled(), base)),
            Span::raw("  "),
        ];

        for page in page_window(state.current, state.total) {
            let style = if page == state.current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            spans.push(Span::styled(format!(" {page} "), style));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled("Next →", enabled_style(state.next_enabled(), base)));
        spans.push(Span::styled(
            format!("   page {} of {}", state.current, state.last_page()),
            Style::default().fg(Color::DarkGray),
        ));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

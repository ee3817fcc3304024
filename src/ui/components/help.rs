use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::UiComponent;

impl UiComponent {
    /// Key hints as `key label` pairs.
    pub fn help<'a>(bindings: &[(&'a str, &'a str)]) -> Paragraph<'a> {
        let mut spans = Vec::with_capacity(bindings.len() * 3);
        for (key, label) in bindings {
            spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(format!(" {label}"), Style::default().fg(Color::Gray)));
            spans.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Center)
    }
}

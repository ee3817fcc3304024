use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::Paragraph,
};

use super::UiComponent;

impl UiComponent {
    /// One-line transient message, e.g. the last external open.
    pub fn status(status: &str) -> Paragraph<'_> {
        Paragraph::new(status)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Right)
    }
}

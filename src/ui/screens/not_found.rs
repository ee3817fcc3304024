// src/ui/screens/not_found.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

pub fn render_not_found(requested: &str, redirect_to: &str, delay_ms: u64, area: Rect, buf: &mut Buffer) {
    let [_, body, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let lines = vec![
        Line::styled("404", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Line::styled(
            format!("Nothing lives at {requested}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            format!("Redirecting to {redirect_to} in {}s…", delay_ms.div_ceil(1000)),
            Style::default().fg(Color::Gray),
        ),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(body, buf);
}

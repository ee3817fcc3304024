pub mod components;
pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use crate::app::App;
use crate::routes::Route;
use crate::ui::screens::{render_feed, render_not_found};
use crate::widgets::detail_overlay::centered_rect;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.route {
            Route::View { .. } => render_feed(self, area, buf),
            Route::NotFound { requested, redirect_to } => {
                render_not_found(requested, redirect_to, self.config.timers.redirect_ms, area, buf)
            }
        }

        if let Some(input) = &self.goto_input {
            render_goto_prompt(input, area, buf);
        }
    }
}

fn render_goto_prompt(input: &str, area: Rect, buf: &mut Buffer) {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(centered_rect(50, 100, area));
    Clear.render(row, buf);
    Paragraph::new(Line::from(vec![
        Span::styled("go to ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{input}▏"), Style::default().fg(Color::White)),
    ]))
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Enter to go · Esc to cancel "),
    )
    .render(row, buf);
}

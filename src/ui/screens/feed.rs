// src/ui/screens/feed.rs
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::App;
use crate::feed::{paginate, FeedRecord, RecordBody};
use crate::routes::{self, Route};
use crate::ui::components::UiComponent;
use crate::widgets::detail_overlay::{centered_rect, DetailOverlayWidget};
use crate::widgets::doc_embed::DocEmbedWidget;
use crate::widgets::feed_list::FeedListWidget;
use crate::widgets::page_viewer::PageViewerWidget;
use crate::widgets::pagination::PaginationWidget;

const KEYS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("←→", "page"),
    ("Enter", "open"),
    ("+/-", "zoom"),
    ("</>", "doc page"),
    ("f", "full view"),
    ("o", "open doc"),
    ("a", "apply"),
    ("Tab", "next view"),
    ("g", "go to"),
    ("q", "quit"),
];

pub fn render_feed(app: &mut App, area: Rect, buf: &mut Buffer) {
    let [header_area, list_area, pagination_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);

    render_header(app, header_area, buf);

    let records: &[FeedRecord] = match &app.route {
        Route::View { path } => app
            .feeds
            .get(path)
            .map(|all| paginate(all, app.config.page_size, app.pagination.current).records)
            .unwrap_or(&[]),
        Route::NotFound { .. } => &[],
    };
    let selected = app.selection.current();

    if records.is_empty() {
        UiComponent::empty_message("No listings to show yet.", Some(Color::DarkGray))
            .render(list_area, buf);
    } else {
        FeedListWidget {
            records,
            selected,
            viewers: &mut app.viewers,
            embeds: &app.embeds,
            picker: &app.picker,
            throbber: &app.throbber,
            placeholder: !app.placeholder_ready,
        }
        .render(list_area, buf);
    }

    PaginationWidget::new().render(&app.pagination, pagination_area, buf);
    UiComponent::help(KEYS).render(footer_area, buf);

    // Full views cover the list
    if let Some(record) = selected.and_then(|i| records.get(i)) {
        match &record.body {
            RecordBody::Pdf(_) => {
                if let Some(viewer) = app.viewers.get_mut(&record.id) {
                    if viewer.state().is_expanded() {
                        Clear.render(area, buf);
                        PageViewerWidget::new(&app.picker, &app.throbber)
                            .focused(true)
                            .placeholder(!app.placeholder_ready)
                            .render(viewer, area, buf);
                    }
                }
            }
            RecordBody::Post(post) => {
                let embed = app.embeds.get(&record.id).filter(|e| e.full_screen);
                if let (Some(embed), Some(urls)) = (embed, &post.external_doc_urls) {
                    let panel = centered_rect(90, 60, area);
                    Clear.render(panel, buf);
                    DocEmbedWidget::new(&post.title, urls)
                        .focused(true)
                        .render(embed, panel, buf);
                }
            }
        }
    }

    if let Some(detail) = app.detail.as_mut() {
        let post = records
            .iter()
            .find(|r| r.id == detail.record_id)
            .and_then(FeedRecord::as_post);
        if let Some(post) = post {
            DetailOverlayWidget::new(post)
                .embed(app.embeds.get(&detail.record_id))
                .render(detail, area, buf);
        }
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Job Board ");
    let inner = block.inner(area);
    block.render(area, buf);

    let current = app.route.path();
    let mut tabs = Vec::new();
    for view in &app.config.views {
        let style = if routes::normalize(&view.path) == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(format!(" {} ", view.title), style));
        tabs.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(tabs)).render(inner, buf);

    if let Some(status) = &app.status {
        UiComponent::status(status).render(inner, buf);
    }
}

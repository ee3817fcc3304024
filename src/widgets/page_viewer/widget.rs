// src/widgets/page_viewer/widget.rs
use image::imageops::FilterType;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};
use ratatui_image::{picker::Picker, Resize, StatefulImage};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::log_warn;
use crate::ui::style::{dim_unless_focused, enabled_style};

use super::layout::{display_cells, surface_layout, visible_backing, visible_natural};
use super::surface::{PaintKey, PaintedPage, SurfaceContent};
use super::PageViewer;

/// Draws one viewer: a navigation bar above the page surface.
pub struct PageViewerWidget<'a> {
    picker: &'a Picker,
    throbber: &'a ThrobberState,
    focused: bool,
    placeholder: bool,
    title: Option<&'a str>,
}

impl<'a> PageViewerWidget<'a> {
    pub fn new(picker: &'a Picker, throbber: &'a ThrobberState) -> Self {
        Self {
            picker,
            throbber,
            focused: false,
            placeholder: false,
            title: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show the throbber instead of the surface until content is ready.
    pub fn placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn render(self, viewer: &mut PageViewer, area: Rect, buf: &mut Buffer) {
        let border = dim_unless_focused(
            self.focused,
            Style::default().fg(if viewer.state().is_expanded() {
                Color::Yellow
            } else {
                Color::Cyan
            }),
        );
        let title = self.title.unwrap_or(viewer.record_id());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(format!(" 📄 {title} "));
        let inner = block.inner(area);
        block.render(area, buf);

        let [nav_area, surface_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

        nav_bar(viewer, self.focused).render(nav_area, buf);

        if self.placeholder {
            self.render_throbber("Preparing document…", surface_area, buf);
            return;
        }

        match viewer.content().clone() {
            SurfaceContent::Blank => {}
            SurfaceContent::Loading { page_index } => {
                self.render_throbber(&format!("Loading page {}…", page_index + 1), surface_area, buf);
            }
            SurfaceContent::Failed { page_index, reason } => {
                render_failure(page_index, &reason, surface_area, buf);
            }
            SurfaceContent::Ready { page_index, image } => {
                self.render_page(viewer, page_index, &image, surface_area, buf);
            }
        }
    }

    fn render_throbber(&self, label: &str, area: Rect, buf: &mut Buffer) {
        let throbber = Throbber::default()
            .label(label.to_string())
            .style(Style::default().fg(Color::Gray))
            .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let mut state = self.throbber.clone();
        let line = Rect { height: area.height.min(1), ..area };
        StatefulWidget::render(throbber, line, buf, &mut state);
    }

    fn render_page(
        &self,
        viewer: &mut PageViewer,
        page_index: usize,
        image: &image::DynamicImage,
        area: Rect,
        buf: &mut Buffer,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let font = self.picker.font_size();
        let container_width = f64::from(area.width) * f64::from(font.0);
        let layout = surface_layout(
            (image.width(), image.height()),
            container_width,
            viewer.state().zoom(),
            viewer.density(),
        );
        let cells = display_cells(layout.display, font);
        let visible_cells = (cells.0.min(area.width), cells.1.min(area.height));
        let key = PaintKey {
            page_index,
            layout,
            visible_cells,
        };

        let painted = viewer.painted_mut();
        if painted.as_ref().map(|p| p.key) != Some(key) {
            // Resample only the part of the page that will be on screen.
            let (crop_w, crop_h) = visible_backing(&layout, visible_cells, font);
            let (src_w, src_h) =
                visible_natural((image.width(), image.height()), &layout, (crop_w, crop_h));
            let scaled = image
                .crop_imm(0, 0, src_w, src_h)
                .resize_exact(crop_w, crop_h, FilterType::Lanczos3);
            *painted = Some(PaintedPage {
                key,
                protocol: self.picker.new_resize_protocol(scaled),
            });
        }

        let Some(page) = painted.as_mut() else {
            return;
        };

        let target = Rect {
            x: area.x + (area.width - visible_cells.0) / 2,
            y: area.y,
            width: visible_cells.0,
            height: visible_cells.1,
        };
        StatefulImage::default()
            .resize(Resize::Fit(None))
            .render(target, buf, &mut page.protocol);

        if let Some(Err(e)) = page.protocol.last_encoding_result() {
            log_warn!("Image encoding error: {}", e);
        }
    }
}

fn nav_bar(viewer: &PageViewer, focused: bool) -> Paragraph<'static> {
    let state = viewer.state();
    let base = dim_unless_focused(focused, Style::default().fg(Color::Gray));
    let pages = state.page_count.max(1);

    let spans = vec![
        Span::styled("[-]", enabled_style(state.can_zoom_out(), base)),
        Span::styled(format!(" {:>3.0}% ", state.zoom() * 100.0), base),
        Span::styled("[+]", enabled_style(state.can_zoom_in(), base)),
        Span::raw("   "),
        Span::styled("< Prev", enabled_style(state.has_prev_page(), base)),
        Span::styled(format!("  page {} of {}  ", state.page_index + 1, pages), base),
        Span::styled("Next >", enabled_style(state.has_next_page(), base)),
        Span::raw("   "),
        Span::styled(
            if state.is_expanded() { "[f] close" } else { "[f] full view" },
            base,
        ),
    ];
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn render_failure(page_index: usize, reason: &str, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            format!("✗ Page {} could not be loaded", page_index + 1),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

use std::collections::HashMap;
use std::time::Duration;

use color_eyre::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    DefaultTerminal,
};
use ratatui_image::picker::Picker;
use throbber_widgets_tui::ThrobberState;

use crate::config::AppConfig;
use crate::event::{AppEvent, Event, EventHandler, TimerKind};
use crate::feed::{self, paginate, total_pages, FeedRecord, PostRecord, RecordBody};
use crate::routes::{self, Route};
use crate::util::browser::ExternalBrowser;
use crate::util::timer::OneShot;
use crate::widgets::detail_overlay::{DetailOverlay, OverlayIntent};
use crate::widgets::doc_embed::{EmbedIntent, EmbedState, EmbedStateMachine};
use crate::widgets::feed_list::{FeedSelection, SelectionIntent};
use crate::widgets::page_viewer::{PageLoad, PageLoader, PageViewer, ViewerIntent};
use crate::widgets::pagination::{PaginationEvent, PaginationIntent, PaginationState, PaginationStateMachine};
use crate::{log_debug, log_error, log_info};

/// Read and merge the sources of every configured view, keyed by view path.
pub fn load_feeds(config: &AppConfig) -> crate::Result<HashMap<String, Vec<FeedRecord>>> {
    let mut feeds = HashMap::new();
    for view in &config.views {
        let sources = feed::load_sources(&config.asset_root, &view.sources)?;
        let records = feed::combine(sources);
        log_info!("View {} has {} records", view.path, records.len());
        feeds.insert(routes::normalize(&view.path), records);
    }
    Ok(feeds)
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: AppConfig,
    pub route: Route,
    /// Merged feed per view path.
    pub feeds: HashMap<String, Vec<FeedRecord>>,
    pub pagination: PaginationState,
    pub selection: FeedSelection,
    /// Document viewers of the mounted feed page, by record id.
    pub viewers: HashMap<String, PageViewer>,
    /// Embed panels of the mounted feed page, by record id.
    pub embeds: HashMap<String, EmbedState>,
    pub detail: Option<DetailOverlay>,
    /// Text typed into the go-to prompt while it is open.
    pub goto_input: Option<String>,
    pub status: Option<String>,
    /// Documents stay behind a placeholder until this mount's timer fires.
    pub placeholder_ready: bool,
    pub picker: Picker,
    pub throbber: ThrobberState,
    /// Event handler.
    pub events: EventHandler,
    mount: u64,
    placeholder_timer: Option<OneShot>,
    route_generation: u64,
    redirect_timer: Option<OneShot>,
    loader: PageLoader,
    browser: ExternalBrowser,
}

impl App {
    /// Load every view's feed and start on the first view.
    pub fn new(config: AppConfig, picker: Picker) -> Result<Self> {
        let feeds = load_feeds(&config)?;
        Ok(Self::from_parts(config, feeds, EventHandler::new(), picker))
    }

    pub fn from_parts(
        config: AppConfig,
        feeds: HashMap<String, Vec<FeedRecord>>,
        events: EventHandler,
        picker: Picker,
    ) -> Self {
        let loader = PageLoader::new(config.asset_root.clone(), events.sender());
        let mut app = Self {
            running: true,
            route: Route::View {
                path: "/".to_string(),
            },
            feeds,
            pagination: PaginationState::default(),
            selection: FeedSelection::default(),
            viewers: HashMap::new(),
            embeds: HashMap::new(),
            detail: None,
            goto_input: None,
            status: None,
            placeholder_ready: true,
            picker,
            throbber: ThrobberState::default(),
            events,
            mount: 0,
            placeholder_timer: None,
            route_generation: 0,
            redirect_timer: None,
            loader,
            browser: ExternalBrowser::new(),
            config,
        };
        let start = app
            .config
            .views
            .first()
            .map(|v| v.path.clone())
            .unwrap_or_else(|| "/".to_string());
        app.navigate(&start);
        app
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                // save power
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => needs_redraw = self.tick(),
                Event::Crossterm(event) => match event {
                    crossterm::event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_events(key_event)?;
                        needs_redraw = true;
                    }
                    crossterm::event::Event::Mouse(mouse_event) => {
                        needs_redraw = self.handle_mouse_event(mouse_event);
                    }
                    crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Event::App(app_event) => needs_redraw = self.handle_app_event(app_event),
            }
        }
        Ok(())
    }

    /// Advance the throbber while anything is waiting. Returns whether a
    /// redraw is needed.
    pub fn tick(&mut self) -> bool {
        let waiting = !self.placeholder_ready || self.viewers.values().any(PageViewer::is_loading);
        if waiting {
            self.throbber.calc_next();
        }
        waiting
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        // Go-to prompt swallows everything else
        if let Some(input) = self.goto_input.as_mut() {
            match key_event.code {
                KeyCode::Esc => self.goto_input = None,
                KeyCode::Enter => {
                    let path = std::mem::take(input);
                    self.goto_input = None;
                    self.events.send(AppEvent::Navigate(path));
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(ch) => input.push(ch),
                _ => {}
            }
            return Ok(());
        }

        if self.detail.is_some() {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('x') => self.events.send(AppEvent::CloseDetail),
                KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::ScrollDetailUp),
                KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::ScrollDetailDown),
                KeyCode::Char('a') => self.events.send(AppEvent::OpenApply),
                KeyCode::Char('s') => self.events.send(AppEvent::OpenSource),
                KeyCode::Char('<' | '[') => self.events.send(AppEvent::Embed(EmbedIntent::Previous)),
                KeyCode::Char('>' | ']') => self.events.send(AppEvent::Embed(EmbedIntent::Next)),
                KeyCode::Char('o') => self.events.send(AppEvent::OpenEmbedExternal),
                KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                _ => {}
            }
            return Ok(());
        }

        // Esc leaves a full view before it quits
        let full_view = self.selected_is_full_view();
        match key_event.code {
            KeyCode::Esc if full_view => self.send_document_toggle(),
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::SelectNext),
            KeyCode::Left | KeyCode::Char('h') => {
                self.events.send(AppEvent::Pagination(PaginationIntent::Previous))
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.events.send(AppEvent::Pagination(PaginationIntent::Next))
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let page = digit as usize - '0' as usize;
                self.events.send(AppEvent::Pagination(PaginationIntent::GoTo { page }))
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.events.send(AppEvent::Activate),
            KeyCode::Char('+' | '=') => self.events.send(AppEvent::Viewer(ViewerIntent::ZoomIn)),
            KeyCode::Char('-' | '_') => self.events.send(AppEvent::Viewer(ViewerIntent::ZoomOut)),
            KeyCode::Char('<' | '[') => self.send_document_step(false),
            KeyCode::Char('>' | ']') => self.send_document_step(true),
            KeyCode::Char('f') => self.send_document_toggle(),
            KeyCode::Char('o') => self.events.send(AppEvent::OpenEmbedExternal),
            KeyCode::Char('a') => self.events.send(AppEvent::OpenApply),
            KeyCode::Char('s') => self.events.send(AppEvent::OpenSource),
            KeyCode::Char('g') => self.events.send(AppEvent::OpenGoTo),
            KeyCode::Tab => {
                let next = self.next_view_path();
                self.events.send(AppEvent::Navigate(next));
            }
            _ => {}
        }
        Ok(())
    }

    /// Mouse clicks only dismiss the detail overlay through its backdrop.
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> bool {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let on_backdrop = self
            .detail
            .as_ref()
            .is_some_and(|d| d.is_backdrop(mouse_event.column, mouse_event.row));
        if on_backdrop {
            self.close_detail();
        }
        on_backdrop
    }

    /// Applies one application event. Returns whether a redraw is needed.
    pub fn handle_app_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::Navigate(path) => self.navigate(&path),
            AppEvent::OpenGoTo => self.goto_input = Some(String::new()),
            AppEvent::SelectNext => return self.selection.apply(SelectionIntent::Next),
            AppEvent::SelectPrevious => return self.selection.apply(SelectionIntent::Previous),
            AppEvent::Activate => self.activate(),
            AppEvent::Pagination(intent) => {
                let (state, events) = PaginationStateMachine::transition(self.pagination, intent);
                self.pagination = state;
                if events.is_empty() {
                    return false;
                }
                for event in events {
                    let PaginationEvent::PageChanged { page } = event;
                    log_debug!("Feed page changed to {}", page);
                }
                self.mount_page();
            }
            AppEvent::CloseDetail => self.close_detail(),
            AppEvent::ScrollDetailUp => return self.scroll_detail(OverlayIntent::ScrollUp),
            AppEvent::ScrollDetailDown => return self.scroll_detail(OverlayIntent::ScrollDown),
            AppEvent::OpenApply => self.open_post_link(|post| post.apply_url.clone()),
            AppEvent::OpenSource => self.open_post_link(|post| post.source_url.clone()),
            AppEvent::Viewer(intent) => {
                let Some(viewer) = self.selected_viewer_mut() else {
                    return false;
                };
                return !viewer.apply(intent).is_empty();
            }
            AppEvent::PageLoaded(load) => return self.on_page_loaded(load),
            AppEvent::Embed(intent) => return self.apply_embed(intent),
            AppEvent::OpenEmbedExternal => self.open_embed_external(),
            AppEvent::TimerFired(kind) => return self.on_timer(kind),
        }
        true
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn navigate(&mut self, path: &str) {
        self.route_generation += 1;
        self.redirect_timer = None;
        self.route = routes::resolve(path, &self.config.views);
        log_info!("Navigated to {:?}", self.route);

        match &self.route {
            Route::View { path } => {
                let total = total_pages(
                    self.feeds.get(path).map_or(0, Vec::len),
                    self.config.page_size,
                );
                self.pagination = PaginationState::new(total);
                self.mount_page();
            }
            Route::NotFound { .. } => {
                self.unmount_page();
                self.redirect_timer = Some(OneShot::spawn(
                    Duration::from_millis(self.config.timers.redirect_ms),
                    self.events.sender(),
                    AppEvent::TimerFired(TimerKind::Redirect {
                        generation: self.route_generation,
                    }),
                ));
            }
        }
    }

    /// Records shown on the current feed page.
    pub fn page_records(&self) -> &[FeedRecord] {
        let Route::View { path } = &self.route else {
            return &[];
        };
        match self.feeds.get(path) {
            Some(records) => {
                paginate(records, self.config.page_size, self.pagination.current).records
            }
            None => &[],
        }
    }

    pub fn selected_record(&self) -> Option<&FeedRecord> {
        self.selection
            .current()
            .and_then(|index| self.page_records().get(index))
    }

    pub fn detail_post(&self) -> Option<&PostRecord> {
        let detail = self.detail.as_ref()?;
        self.page_records()
            .iter()
            .find(|r| r.id == detail.record_id)
            .and_then(FeedRecord::as_post)
    }

    /// Drop everything owned by the previous page, which aborts its loads
    /// and timers.
    fn unmount_page(&mut self) {
        self.viewers.clear();
        self.embeds.clear();
        self.detail = None;
        self.placeholder_timer = None;
        self.placeholder_ready = true;
        self.selection = FeedSelection::default();
    }

    fn mount_page(&mut self) {
        self.unmount_page();
        self.mount += 1;

        let mut viewers = HashMap::new();
        let mut embeds = HashMap::new();
        let records = self.page_records();
        let count = records.len();
        for record in records {
            match &record.body {
                RecordBody::Pdf(pdf) => {
                    let mut viewer = PageViewer::new(
                        record.id.clone(),
                        pdf.page_image_urls.clone(),
                        &self.config.viewer,
                        self.loader.clone(),
                    );
                    viewer.mount();
                    viewers.insert(record.id.clone(), viewer);
                }
                RecordBody::Post(post) => {
                    if let Some(urls) = &post.external_doc_urls {
                        embeds.insert(record.id.clone(), EmbedState::new(urls.len(), &self.config.embeds));
                    }
                }
            }
        }
        self.selection = FeedSelection::new(count);
        self.viewers = viewers;
        self.embeds = embeds;

        let delay = self.config.timers.pdf_placeholder_ms;
        if !self.viewers.is_empty() && delay > 0 {
            self.placeholder_ready = false;
            self.placeholder_timer = Some(OneShot::spawn(
                Duration::from_millis(delay),
                self.events.sender(),
                AppEvent::TimerFired(TimerKind::PdfPlaceholder { mount: self.mount }),
            ));
        }
        log_debug!(
            "Mounted page {} with {} viewers (mount {})",
            self.pagination.current,
            self.viewers.len(),
            self.mount
        );
    }

    fn on_timer(&mut self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::PdfPlaceholder { mount } if mount == self.mount => {
                self.placeholder_timer = None;
                self.placeholder_ready = true;
                true
            }
            TimerKind::Redirect { generation } if generation == self.route_generation => {
                if let Route::NotFound { redirect_to, .. } = &self.route {
                    let target = redirect_to.clone();
                    self.navigate(&target);
                    return true;
                }
                false
            }
            _ => {
                log_debug!("Ignoring stale timer {:?}", kind);
                false
            }
        }
    }

    fn on_page_loaded(&mut self, load: PageLoad) -> bool {
        match self
            .viewers
            .values_mut()
            .find(|viewer| viewer.id() == load.ticket.viewer)
        {
            Some(viewer) => viewer.on_loaded(load),
            // Viewer unmounted while the load was in flight
            None => false,
        }
    }

    fn activate(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        let id = record.id.clone();
        let embed_only = record.as_post().map(PostRecord::is_embed_only);
        match embed_only {
            None => self.events.send(AppEvent::Viewer(ViewerIntent::ToggleExpanded)),
            Some(true) if !self.config.embeds.detail_for_embeds => {
                self.events.send(AppEvent::Embed(EmbedIntent::ToggleFullScreen))
            }
            Some(_) => self.detail = Some(DetailOverlay::new(id)),
        }
    }

    fn close_detail(&mut self) {
        self.detail = None;
    }

    fn scroll_detail(&mut self, intent: OverlayIntent) -> bool {
        self.detail.as_mut().is_some_and(|d| d.apply(intent))
    }

    fn selected_viewer_mut(&mut self) -> Option<&mut PageViewer> {
        let id = self.selected_record()?.id.clone();
        self.viewers.get_mut(&id)
    }

    /// Record whose embeds the embed keys act on: the open overlay's post,
    /// else the selected card.
    fn embed_target(&self) -> Option<String> {
        match &self.detail {
            Some(detail) => Some(detail.record_id.clone()),
            None => self.selected_record().map(|r| r.id.clone()),
        }
    }

    fn apply_embed(&mut self, intent: EmbedIntent) -> bool {
        let Some(id) = self.embed_target() else {
            return false;
        };
        let Some(state) = self.embeds.get_mut(&id) else {
            return false;
        };
        let (next, events) = EmbedStateMachine::transition(*state, intent);
        *state = next;
        !events.is_empty()
    }

    fn selected_is_full_view(&self) -> bool {
        let Some(record) = self.selected_record() else {
            return false;
        };
        match &record.body {
            RecordBody::Pdf(_) => self
                .viewers
                .get(&record.id)
                .is_some_and(|v| v.state().is_expanded()),
            RecordBody::Post(_) => self.embeds.get(&record.id).is_some_and(|e| e.full_screen),
        }
    }

    fn send_document_step(&mut self, forward: bool) {
        let event = match self.selected_record().map(FeedRecord::kind) {
            Some(feed::RecordKind::Pdf) => AppEvent::Viewer(if forward {
                ViewerIntent::NextPage
            } else {
                ViewerIntent::PrevPage
            }),
            Some(feed::RecordKind::Post) => AppEvent::Embed(if forward {
                EmbedIntent::Next
            } else {
                EmbedIntent::Previous
            }),
            None => return,
        };
        self.events.send(event);
    }

    fn send_document_toggle(&mut self) {
        let event = match self.selected_record().map(FeedRecord::kind) {
            Some(feed::RecordKind::Pdf) => AppEvent::Viewer(ViewerIntent::ToggleExpanded),
            Some(feed::RecordKind::Post) => AppEvent::Embed(EmbedIntent::ToggleFullScreen),
            None => return,
        };
        self.events.send(event);
    }

    fn next_view_path(&self) -> String {
        let views = &self.config.views;
        let current = views
            .iter()
            .position(|v| routes::normalize(&v.path) == self.route.path());
        let next = current.map_or(0, |i| (i + 1) % views.len().max(1));
        views
            .get(next)
            .map(|v| v.path.clone())
            .unwrap_or_else(|| "/".to_string())
    }

    fn open_post_link(&mut self, link: impl Fn(&PostRecord) -> Option<String>) {
        let post = match self.detail_post() {
            Some(post) => Some(post),
            None => self.selected_record().and_then(FeedRecord::as_post),
        };
        match post.and_then(link) {
            Some(url) => self.open_external(url),
            None => self.status = Some("No link for this post".to_string()),
        }
    }

    fn open_embed_external(&mut self) {
        let url = self.embed_target().and_then(|id| {
            let state = self.embeds.get(&id)?;
            let post = self.page_records().iter().find(|r| r.id == id)?.as_post()?;
            let urls = post.external_doc_urls.as_deref()?;
            state.current(urls).map(str::to_string)
        });
        match url {
            Some(url) => self.open_external(url),
            None => self.status = Some("No document to open".to_string()),
        }
    }

    fn open_external(&mut self, url: String) {
        self.status = Some(format!("Opening {url}"));
        let browser = self.browser.clone();
        tokio::spawn(async move {
            if let Err(e) = browser.open_url(&url).await {
                log_error!("Failed to open {}: {}", url, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::feed::PdfRecord;

    fn post(id: &str, embeds: Option<Vec<&str>>) -> FeedRecord {
        FeedRecord {
            id: id.to_string(),
            body: RecordBody::Post(PostRecord {
                title: id.to_string(),
                summary: embeds.is_none().then(|| "body".to_string()),
                apply_url: Some(format!("https://apply/{id}")),
                external_doc_urls: embeds.map(|u| u.into_iter().map(String::from).collect()),
                ..PostRecord::default()
            }),
        }
    }

    fn pdf(id: &str) -> FeedRecord {
        FeedRecord {
            id: id.to_string(),
            body: RecordBody::Pdf(PdfRecord {
                page_image_urls: vec!["/p1.png".into(), "/p2.png".into()],
            }),
        }
    }

    fn app() -> App {
        let mut config = AppConfig::default();
        config.page_size = 2;
        config.asset_root = "/nonexistent-root".into();
        config.views = vec![
            ViewConfig {
                path: "/".into(),
                title: "Home".into(),
                sources: vec![],
            },
            ViewConfig {
                path: "/vacancies".into(),
                title: "Vacancies".into(),
                sources: vec![],
            },
        ];
        let mut feeds = HashMap::new();
        feeds.insert(
            "/".to_string(),
            vec![pdf("pdf-0"), post("a-0", None), post("a-1", Some(vec!["https://d/1", "https://d/2"]))],
        );
        feeds.insert("/vacancies".to_string(), vec![post("b-0", None)]);
        App::from_parts(config, feeds, EventHandler::detached(), Picker::from_fontsize((8, 16)))
    }

    fn drain(app: &mut App) {
        while let Some(event) = app.events.try_next() {
            if let Event::App(event) = event {
                app.handle_app_event(event);
            }
        }
    }

    #[tokio::test]
    async fn test_mounts_viewers_for_first_page() {
        let app = app();
        assert_eq!(app.pagination, PaginationState { current: 1, total: 2 });
        assert_eq!(app.viewers.len(), 1);
        assert!(app.viewers.contains_key("pdf-0"));
        assert!(!app.placeholder_ready);
    }

    #[tokio::test]
    async fn test_paging_remounts() {
        let mut app = app();
        assert!(app.handle_app_event(AppEvent::Pagination(PaginationIntent::Next)));
        assert!(app.viewers.is_empty());
        assert_eq!(app.embeds.len(), 1);
        assert!(app.placeholder_ready);
        assert_eq!(app.page_records()[0].id, "a-1");
    }

    #[tokio::test]
    async fn test_stale_placeholder_timer_ignored() {
        let mut app = app();
        let first_mount = app.mount;
        app.handle_app_event(AppEvent::Pagination(PaginationIntent::Next));
        app.handle_app_event(AppEvent::Pagination(PaginationIntent::Previous));
        assert!(!app.handle_app_event(AppEvent::TimerFired(TimerKind::PdfPlaceholder {
            mount: first_mount
        })));
        assert!(!app.placeholder_ready);
        let current = app.mount;
        assert!(app.handle_app_event(AppEvent::TimerFired(TimerKind::PdfPlaceholder { mount: current })));
        assert!(app.placeholder_ready);
    }

    #[tokio::test]
    async fn test_activate_post_opens_detail_and_closes() {
        let mut app = app();
        app.handle_app_event(AppEvent::SelectNext);
        app.handle_app_event(AppEvent::Activate);
        assert_eq!(app.detail.as_ref().map(|d| d.record_id.as_str()), Some("a-0"));
        app.handle_app_event(AppEvent::CloseDetail);
        assert!(app.detail.is_none());
    }

    #[tokio::test]
    async fn test_activate_embed_toggles_full_screen() {
        let mut app = app();
        app.handle_app_event(AppEvent::Pagination(PaginationIntent::Next));
        app.handle_app_event(AppEvent::Activate);
        drain(&mut app);
        assert!(app.detail.is_none());
        assert!(app.embeds["a-1"].full_screen);
    }

    #[tokio::test]
    async fn test_activate_pdf_expands_viewer() {
        let mut app = app();
        app.handle_app_event(AppEvent::Activate);
        drain(&mut app);
        assert!(app.viewers["pdf-0"].state().is_expanded());
    }

    #[tokio::test]
    async fn test_unknown_route_redirects_on_current_generation() {
        let mut app = app();
        app.navigate("/vacancy");
        assert_eq!(
            app.route,
            Route::NotFound {
                requested: "/vacancy".into(),
                redirect_to: "/vacancies".into()
            }
        );
        assert!(app.viewers.is_empty());

        let stale = app.route_generation - 1;
        assert!(!app.handle_app_event(AppEvent::TimerFired(TimerKind::Redirect { generation: stale })));

        let current = app.route_generation;
        assert!(app.handle_app_event(AppEvent::TimerFired(TimerKind::Redirect { generation: current })));
        assert_eq!(app.route, Route::View { path: "/vacancies".into() });
    }

    #[tokio::test]
    async fn test_goto_prompt_navigates() {
        let mut app = app();
        app.handle_app_event(AppEvent::OpenGoTo);
        for ch in "/vacancies".chars() {
            app.handle_key_events(KeyEvent::from(KeyCode::Char(ch))).unwrap();
        }
        app.handle_key_events(KeyEvent::from(KeyCode::Enter)).unwrap();
        drain(&mut app);
        assert!(app.goto_input.is_none());
        assert_eq!(app.route, Route::View { path: "/vacancies".into() });
    }

    #[tokio::test]
    async fn test_backdrop_click_closes_detail() {
        let mut app = app();
        app.handle_app_event(AppEvent::SelectNext);
        app.handle_app_event(AppEvent::Activate);
        if let Some(detail) = app.detail.as_mut() {
            detail.rect = Some(ratatui::layout::Rect::new(10, 5, 20, 10));
        }
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(app.handle_mouse_event(click));
        assert!(app.detail.is_none());
    }
}

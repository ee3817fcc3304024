// src/widgets/page_viewer/state.rs
use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Presentation {
    #[default]
    Collapsed,
    Expanded,
}

/// Zoom is an integral number of steps above `min`, so stepping in and back
/// out always lands on the same factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomScale {
    pub min: f64,
    pub step: f64,
    pub max_level: u32,
}

impl ZoomScale {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            min: config.zoom_min,
            step: config.zoom_step,
            max_level: config.zoom_levels(),
        }
    }

    pub fn factor(&self, level: u32) -> f64 {
        self.min + f64::from(level.min(self.max_level)) * self.step
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerState {
    pub page_index: usize,
    pub page_count: usize,
    pub zoom_level: u32,
    pub presentation: Presentation,
    pub scale: ZoomScale,
}

impl ViewerState {
    pub fn new(page_count: usize, config: &ViewerConfig) -> Self {
        let scale = ZoomScale::from_config(config);
        Self {
            page_index: 0,
            page_count,
            zoom_level: config.default_zoom_level().min(scale.max_level),
            presentation: Presentation::Collapsed,
            scale,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.scale.factor(self.zoom_level)
    }

    pub fn is_expanded(&self) -> bool {
        self.presentation == Presentation::Expanded
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom_level < self.scale.max_level
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom_level > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    pub fn has_prev_page(&self) -> bool {
        self.page_index > 0
    }
}

// ----------------------------------------------------------------------------
// INTENT - Messages that express what user wants to do
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ViewerIntent {
    Expand,
    Collapse,
    ToggleExpanded,
    ZoomIn,
    ZoomOut,
    NextPage,
    PrevPage,
}

// ----------------------------------------------------------------------------
// EVENTS - Things that happened (past tense)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewerEvent {
    StateChanged(ViewerState),
    RenderRequested { page_index: usize },
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct ViewerStateMachine;

impl ViewerStateMachine {
    /// Out-of-range moves are no-ops and produce no events.
    pub fn transition(
        state: ViewerState,
        intent: ViewerIntent,
    ) -> (ViewerState, Vec<ViewerEvent>) {
        use ViewerIntent::*;

        match intent {
            Expand => Self::handle_presentation(state, Presentation::Expanded),
            Collapse => Self::handle_presentation(state, Presentation::Collapsed),
            ToggleExpanded => {
                let target = match state.presentation {
                    Presentation::Collapsed => Presentation::Expanded,
                    Presentation::Expanded => Presentation::Collapsed,
                };
                Self::handle_presentation(state, target)
            }
            ZoomIn => Self::handle_zoom_in(state),
            ZoomOut => Self::handle_zoom_out(state),
            NextPage => Self::handle_next_page(state),
            PrevPage => Self::handle_prev_page(state),
        }
    }

    fn changed(state: ViewerState) -> (ViewerState, Vec<ViewerEvent>) {
        let events = vec![
            ViewerEvent::RenderRequested {
                page_index: state.page_index,
            },
            ViewerEvent::StateChanged(state.clone()),
        ];
        (state, events)
    }

    fn handle_presentation(
        mut state: ViewerState,
        target: Presentation,
    ) -> (ViewerState, Vec<ViewerEvent>) {
        if state.presentation == target {
            return (state, vec![]);
        }
        state.presentation = target;
        Self::changed(state)
    }

    fn handle_zoom_in(mut state: ViewerState) -> (ViewerState, Vec<ViewerEvent>) {
        if !state.can_zoom_in() {
            return (state, vec![]);
        }
        state.zoom_level += 1;
        Self::changed(state)
    }

    fn handle_zoom_out(mut state: ViewerState) -> (ViewerState, Vec<ViewerEvent>) {
        if !state.can_zoom_out() {
            return (state, vec![]);
        }
        state.zoom_level -= 1;
        Self::changed(state)
    }

    fn handle_next_page(mut state: ViewerState) -> (ViewerState, Vec<ViewerEvent>) {
        if !state.has_next_page() {
            return (state, vec![]);
        }
        state.page_index += 1;
        Self::changed(state)
    }

    fn handle_prev_page(mut state: ViewerState) -> (ViewerState, Vec<ViewerEvent>) {
        if !state.has_prev_page() {
            return (state, vec![]);
        }
        state.page_index -= 1;
        Self::changed(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pages: usize) -> ViewerState {
        ViewerState::new(pages, &ViewerConfig::default())
    }

    fn apply(state: ViewerState, intents: &[ViewerIntent]) -> ViewerState {
        intents.iter().fold(state, |s, intent| {
            ViewerStateMachine::transition(s, *intent).0
        })
    }

    #[test]
    fn test_defaults() {
        let s = state(3);
        assert_eq!(s.page_index, 0);
        assert_eq!(s.zoom(), 1.0);
        assert_eq!(s.presentation, Presentation::Collapsed);
    }

    #[test]
    fn test_prev_page_at_start_is_noop() {
        let (next, events) = ViewerStateMachine::transition(state(3), ViewerIntent::PrevPage);
        assert_eq!(next.page_index, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_next_page_at_end_is_noop() {
        let s = apply(state(2), &[ViewerIntent::NextPage]);
        assert_eq!(s.page_index, 1);
        let (next, events) = ViewerStateMachine::transition(s, ViewerIntent::NextPage);
        assert_eq!(next.page_index, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_page_change_requests_render() {
        let (_, events) = ViewerStateMachine::transition(state(3), ViewerIntent::NextPage);
        assert_eq!(events[0], ViewerEvent::RenderRequested { page_index: 1 });
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        let s = apply(state(1), &[ViewerIntent::ZoomIn; 20]);
        assert_eq!(s.zoom(), 3.0);
        assert!(!s.can_zoom_in());

        let s = apply(s, &[ViewerIntent::ZoomOut; 20]);
        assert_eq!(s.zoom(), 0.5);
        assert!(!s.can_zoom_out());
    }

    #[test]
    fn test_zoom_in_then_out_restores() {
        let original = state(1);
        let s = apply(original.clone(), &[ViewerIntent::ZoomIn; 3]);
        assert_eq!(s.zoom(), 1.75);
        let s = apply(s, &[ViewerIntent::ZoomOut; 3]);
        assert_eq!(s.zoom(), original.zoom());
    }

    #[test]
    fn test_expand_collapse() {
        let s = apply(state(1), &[ViewerIntent::Expand]);
        assert!(s.is_expanded());
        let (s, events) = ViewerStateMachine::transition(s, ViewerIntent::Expand);
        assert!(events.is_empty());
        let s = apply(s, &[ViewerIntent::ToggleExpanded]);
        assert!(!s.is_expanded());
    }

    #[test]
    fn test_empty_document_cannot_page() {
        let s = state(0);
        assert!(!s.has_next_page());
        assert!(!s.has_prev_page());
    }
}

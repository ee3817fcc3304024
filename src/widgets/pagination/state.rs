// src/widgets/pagination/state.rs
use serde::{Deserialize, Serialize};

/// Current feed page (1-based) out of `total`. An empty feed still has page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current: usize,
    pub total: usize,
}

impl PaginationState {
    pub fn new(total: usize) -> Self {
        Self { current: 1, total }
    }

    pub fn last_page(&self) -> usize {
        self.total.max(1)
    }

    pub fn previous_enabled(&self) -> bool {
        self.current > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current < self.last_page()
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(0)
    }
}

// ----------------------------------------------------------------------------
// INTENT - Messages that express what user wants to do
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum PaginationIntent {
    Previous,
    Next,
    GoTo { page: usize },
}

// ----------------------------------------------------------------------------
// EVENTS - Things that happened (past tense)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PaginationEvent {
    PageChanged { page: usize },
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct PaginationStateMachine;

impl PaginationStateMachine {
    pub fn transition(
        state: PaginationState,
        intent: PaginationIntent,
    ) -> (PaginationState, Vec<PaginationEvent>) {
        use PaginationIntent::*;

        let target = match intent {
            Previous if state.previous_enabled() => state.current - 1,
            Next if state.next_enabled() => state.current + 1,
            GoTo { page } if (1..=state.last_page()).contains(&page) => page,
            _ => return (state, vec![]),
        };

        if target == state.current {
            return (state, vec![]);
        }

        let state = PaginationState {
            current: target,
            ..state
        };
        (state, vec![PaginationEvent::PageChanged { page: target }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_disabled_on_first_page() {
        let state = PaginationState::new(3);
        let (next, events) = PaginationStateMachine::transition(state, PaginationIntent::Previous);
        assert_eq!(next, state);
        assert!(events.is_empty());
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let state = PaginationState { current: 3, total: 3 };
        assert!(!state.next_enabled());
        let (next, events) = PaginationStateMachine::transition(state, PaginationIntent::Next);
        assert_eq!(next.current, 3);
        assert!(events.is_empty());
    }

    #[test]
    fn test_goto_valid_and_invalid() {
        let state = PaginationState::new(4);
        let (state, events) =
            PaginationStateMachine::transition(state, PaginationIntent::GoTo { page: 4 });
        assert_eq!(state.current, 4);
        assert_eq!(events, vec![PaginationEvent::PageChanged { page: 4 }]);

        let (state, events) =
            PaginationStateMachine::transition(state, PaginationIntent::GoTo { page: 5 });
        assert_eq!(state.current, 4);
        assert!(events.is_empty());

        let (_, events) =
            PaginationStateMachine::transition(state, PaginationIntent::GoTo { page: 4 });
        assert!(events.is_empty());
    }

    #[test]
    fn test_empty_feed_has_single_page() {
        let state = PaginationState::new(0);
        assert!(!state.previous_enabled());
        assert!(!state.next_enabled());
        assert_eq!(state.last_page(), 1);
    }
}

// src/widgets/doc_embed/state.rs
use serde::{Deserialize, Serialize};

use crate::config::EmbedPolicy;

/// Which external document of a post is showing. `count` is the number of
/// URLs reachable under the current policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedState {
    pub index: usize,
    pub count: usize,
    pub full_screen: bool,
}

impl EmbedState {
    pub fn new(url_count: usize, policy: &EmbedPolicy) -> Self {
        let count = if policy.paginate_multi_url {
            url_count
        } else {
            url_count.min(1)
        };
        Self {
            index: 0,
            count,
            full_screen: false,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn current<'a>(&self, urls: &'a [String]) -> Option<&'a str> {
        if self.index < self.count {
            urls.get(self.index).map(String::as_str)
        } else {
            None
        }
    }
}

// ----------------------------------------------------------------------------
// INTENT - Messages that express what user wants to do
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum EmbedIntent {
    Next,
    Previous,
    ToggleFullScreen,
}

// ----------------------------------------------------------------------------
// EVENTS - Things that happened (past tense)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EmbedEvent {
    DocumentChanged { index: usize },
    FullScreenChanged { full_screen: bool },
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct EmbedStateMachine;

impl EmbedStateMachine {
    pub fn transition(state: EmbedState, intent: EmbedIntent) -> (EmbedState, Vec<EmbedEvent>) {
        match intent {
            EmbedIntent::Next if state.has_next() => {
                let index = state.index + 1;
                (EmbedState { index, ..state }, vec![EmbedEvent::DocumentChanged { index }])
            }
            EmbedIntent::Previous if state.has_previous() => {
                let index = state.index - 1;
                (EmbedState { index, ..state }, vec![EmbedEvent::DocumentChanged { index }])
            }
            EmbedIntent::ToggleFullScreen if state.count > 0 => {
                let full_screen = !state.full_screen;
                (
                    EmbedState { full_screen, ..state },
                    vec![EmbedEvent::FullScreenChanged { full_screen }],
                )
            }
            _ => (state, vec![]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(paginate_multi_url: bool) -> EmbedPolicy {
        EmbedPolicy {
            paginate_multi_url,
            ..EmbedPolicy::default()
        }
    }

    #[test]
    fn test_next_and_previous_clamp() {
        let state = EmbedState::new(2, &policy(true));
        let (state, events) = EmbedStateMachine::transition(state, EmbedIntent::Previous);
        assert_eq!(state.index, 0);
        assert!(events.is_empty());

        let (state, events) = EmbedStateMachine::transition(state, EmbedIntent::Next);
        assert_eq!(events, vec![EmbedEvent::DocumentChanged { index: 1 }]);
        let (state, events) = EmbedStateMachine::transition(state, EmbedIntent::Next);
        assert_eq!(state.index, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_single_url_policy_pins_first() {
        let urls = vec!["https://a".to_string(), "https://b".to_string()];
        let state = EmbedState::new(urls.len(), &policy(false));
        assert_eq!(state.count, 1);
        let (state, _) = EmbedStateMachine::transition(state, EmbedIntent::Next);
        assert_eq!(state.current(&urls), Some("https://a"));
    }

    #[test]
    fn test_full_screen_toggle() {
        let state = EmbedState::new(1, &policy(true));
        let (state, _) = EmbedStateMachine::transition(state, EmbedIntent::ToggleFullScreen);
        assert!(state.full_screen);
        let (state, _) = EmbedStateMachine::transition(state, EmbedIntent::ToggleFullScreen);
        assert!(!state.full_screen);
    }

    #[test]
    fn test_no_urls_is_inert() {
        let state = EmbedState::new(0, &policy(true));
        let (state, events) = EmbedStateMachine::transition(state, EmbedIntent::ToggleFullScreen);
        assert!(!state.full_screen);
        assert!(events.is_empty());
        assert_eq!(state.current(&[]), None);
    }
}

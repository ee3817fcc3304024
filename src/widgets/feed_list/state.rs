// src/widgets/feed_list/state.rs
use serde::{Deserialize, Serialize};

/// Selected card on the current feed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedSelection {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionIntent {
    Next,
    Previous,
}

impl FeedSelection {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Moves stop at either end. Returns whether the selection moved.
    pub fn apply(&mut self, intent: SelectionIntent) -> bool {
        let target = match intent {
            SelectionIntent::Next if self.index + 1 < self.len => self.index + 1,
            SelectionIntent::Previous if self.index > 0 => self.index - 1,
            _ => return false,
        };
        self.index = target;
        true
    }

    pub fn current(&self) -> Option<usize> {
        (self.index < self.len).then_some(self.index)
    }
}

mod state;
mod widget;

pub use state::{PaginationEvent, PaginationIntent, PaginationState, PaginationStateMachine};
pub use widget::PaginationWidget;

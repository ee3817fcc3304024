mod state;
mod widget;

pub use state::{EmbedEvent, EmbedIntent, EmbedState, EmbedStateMachine};
pub use widget::DocEmbedWidget;

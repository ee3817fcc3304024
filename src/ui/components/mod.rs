mod empty_message;
mod help;
mod status;

/// Small styled paragraphs shared by the screens.
pub struct UiComponent;

mod command_exists;
mod open_url;

/// Hands URLs to a desktop browser. Embedded documents and apply links
/// cannot be shown inside the terminal.
#[derive(Debug, Clone, Default)]
pub struct ExternalBrowser;

impl ExternalBrowser {
    pub fn new() -> Self {
        Self
    }
}

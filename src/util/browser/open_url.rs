use std::process::Stdio;
use tokio::process::Command as AsyncCommand;

use crate::log_debug;

use super::ExternalBrowser;

/// One way of handing a URL to the desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Launcher {
    pub program: &'static str,
    pub args: Vec<String>,
    /// Checked with `which` before spawning; `cmd` is always present on Windows.
    pub probe: bool,
}

impl Launcher {
    fn probed(program: &'static str, url: &str) -> Self {
        Self {
            program,
            args: vec![url.to_string()],
            probe: true,
        }
    }
}

/// Launchers to try for `os` (as in `std::env::consts::OS`), in order.
pub(super) fn launchers(os: &str, url: &str) -> Vec<Launcher> {
    match os {
        // The empty argument is the window title `start` expects before the target.
        "windows" => vec![Launcher {
            program: "cmd",
            args: ["/C", "start", "", url].iter().map(|s| s.to_string()).collect(),
            probe: false,
        }],
        "macos" => vec![Launcher::probed("open", url)],
        _ => ["xdg-open", "wslview", "firefox", "chromium-browser", "google-chrome"]
            .into_iter()
            .map(|program| Launcher::probed(program, url))
            .collect(),
    }
}

impl ExternalBrowser {
    pub async fn open_url(&self, url: &str) -> color_eyre::Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(color_eyre::eyre::eyre!("Refusing to open non-web URL: {}", url));
        }

        for launcher in launchers(std::env::consts::OS, url) {
            if launcher.probe && !self.command_exists(launcher.program).await {
                continue;
            }
            let mut cmd = AsyncCommand::new(launcher.program);
            cmd.args(&launcher.args);
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());

            if cmd.spawn().is_ok() {
                log_debug!("Opened {} with {}", url, launcher.program);
                return Ok(());
            }
        }

        Err(color_eyre::eyre::eyre!(
            "No browser found. Install xdg-utils or one of: firefox, chromium-browser"
        ))
    }
}

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui_image::picker::Picker;

use job_board_rust::config::{AppConfig, DEFAULT_CONFIG_PATH};
use job_board_rust::util::log;
use job_board_rust::{log_error, log_info, App};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load(&config_path)?;
    log::init(&config.logging)?;
    log_info!("Starting with config {}", config_path);

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    // Query after entering the alternate screen so the reply is not echoed
    let picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::from_fontsize((8, 16)));

    let result = match App::new(config, picker) {
        Ok(app) => app.run(terminal).await,
        Err(e) => Err(e),
    };

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    if let Err(e) = &result {
        log_error!("Exited with error: {}", e);
    }
    result
}

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod feed;
pub mod routes;
pub mod ui;
pub mod util;
pub mod widgets;

pub use app::App;
pub use config::AppConfig;
pub use error::{JobBoardError, Result};

#[allow(unused_imports)] /// Needed for Stylize in this scope
use ratatui::style::{Style, Stylize};

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim() }
}

/// Disabled controls are drawn dimmed and struck through.
pub fn enabled_style(enabled: bool, style: Style) -> Style {
    if enabled { style.bold() } else { style.dim().crossed_out() }
}

//! Terminal rendering

mod dashboard;
mod login;
mod theme;
mod toast;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Main render function: draws the active screen, then the transient
/// overlays on top
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => login::render(frame, app),
        Screen::Dashboard => dashboard::render(frame, app),
    }

    toast::render(frame, app);
}

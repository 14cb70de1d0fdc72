// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_input(frame, app, layout.input);
    widgets::input::render_scan_type(frame, app, layout.scan_type);
    widgets::results::render_results(frame, app, layout.results);
    widgets::notification::render_notification(frame, app, layout.notification);
    widgets::footer::render_footer(frame, app, layout.footer);
}

// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use rust_i18n::t;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match app.state {
        AppState::Idle => Line::from(vec![
            key("Enter"),
            Span::raw(format!(" {}  ", t!("footer.scan"))),
            key("Tab"),
            Span::raw(format!(" {}  ", t!("footer.category"))),
            key("Esc"),
            Span::raw(format!(" {}", t!("footer.quit"))),
        ]),
        AppState::Finished => Line::from(vec![
            key("↑↓"),
            Span::raw(format!(" {}  ", t!("footer.scroll"))),
            key("N"),
            Span::raw(format!(" {}  ", t!("footer.new_scan"))),
            key("Q"),
            Span::raw(format!(" {}", t!("footer.quit"))),
        ]),
        AppState::Scanning => Line::from(vec![
            Span::raw(format!("{} ", t!("footer.scanning"))),
            key("Esc"),
            Span::raw(format!(" {}", t!("footer.quit"))),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

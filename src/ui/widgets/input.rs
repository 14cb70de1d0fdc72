// src/ui/widgets/input.rs
use crate::app::{App, AppState};
use domscan::ScanType;
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use rust_i18n::t;

/// Renders the domain input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(t!("input.title").to_string())
        .title(Line::from(t!("app.title").to_string()).bold().right_aligned());
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // Show the cursor only while editing.
    if let AppState::Idle = app.state {
        // Clamped to the inner width so long input cannot overflow.
        let typed = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let offset = typed.min(area.width.saturating_sub(2));
        frame.set_cursor_position((
            area.x.saturating_add(offset).saturating_add(1),
            area.y.saturating_add(1),
        ));
    }
}

/// Renders the scan category selector next to the input box.
pub fn render_scan_type(frame: &mut Frame, app: &App, area: Rect) {
    let style = if let AppState::Idle = app.state {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).title(t!("input.scan_type").to_string());
    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(scan_type_label(app.scan_type), style.bold()),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block).alignment(Alignment::Center), area);
}

fn scan_type_label(scan_type: ScanType) -> String {
    match scan_type {
        ScanType::All => t!("scan_type.all"),
        ScanType::Dns => t!("scan_type.dns"),
        ScanType::Ssl => t!("scan_type.ssl"),
        ScanType::Header => t!("scan_type.header"),
        ScanType::Subdomain => t!("scan_type.subdomain"),
        ScanType::Sensitive => t!("scan_type.sensitive"),
    }
    .to_string()
}

// src/ui/widgets/results.rs
use crate::app::{App, AppState, SPINNER_CHARS};
use domscan::ScanResult;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};
use rust_i18n::t;

/// Renders the main content area based on the application state.
pub fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = match (&app.state, &app.scanned_domain, &app.finished_at) {
        (AppState::Finished, Some(domain), Some(at)) => t!(
            "results.title_finished",
            domain = domain,
            time = at.format("%H:%M:%S").to_string()
        )
        .to_string(),
        _ => t!("results.title").to_string(),
    };
    let results_block = Block::default().borders(Borders::ALL).title(title);

    match app.state {
        AppState::Idle => {
            let instructions = Paragraph::new(t!("results.hint").to_string())
                .block(results_block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(instructions, area);
        }
        AppState::Scanning => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame];
            let domain = app.scanned_domain.as_deref().unwrap_or_default();
            let scanning_text = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                Span::raw(t!("results.scanning", domain = domain).to_string()),
            ]))
            .block(results_block)
            .alignment(Alignment::Center);
            frame.render_widget(scanning_text, area);
        }
        AppState::Finished => {
            if app.results.is_empty() {
                let empty = Paragraph::new(t!("results.empty").to_string())
                    .block(results_block)
                    .alignment(Alignment::Center);
                frame.render_widget(empty, area);
                return;
            }

            let inner_area = results_block.inner(area);
            frame.render_widget(results_block, area);

            let cards: Vec<Line> = app
                .results
                .get(app.scroll_offset..)
                .unwrap_or_default()
                .iter()
                .flat_map(build_card)
                .collect();
            let paragraph = Paragraph::new(cards).wrap(Wrap { trim: false });
            frame.render_widget(paragraph, inner_area);

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            frame.render_stateful_widget(scrollbar, area, &mut app.report_scroll_state);
        }
    }
}

/// One card per scanner: its name as a header, then the raw output.
fn build_card(result: &ScanResult) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("▌ ", Style::default().fg(Color::Cyan)),
        Span::styled(result.scanner(), Style::default().fg(Color::Cyan).bold()),
    ])];
    lines.extend(
        result
            .result()
            .lines()
            .map(|l| Line::from(Span::raw(format!("  {}", l)))),
    );
    lines.push(Line::from(""));
    lines
}

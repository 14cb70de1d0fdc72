// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, computed once per frame.
pub struct AppLayout {
    pub input: Rect,
    pub scan_type: Rect,
    pub results: Rect,
    pub notification: Rect,
    pub footer: Rect,
}

/// Splits the frame into the input row, the results area, a notification
/// line and the footer. The input row holds the domain field and the scan
/// category selector side by side.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(26)])
        .split(main_chunks[0]);

    AppLayout {
        input: input_chunks[0],
        scan_type: input_chunks[1],
        results: main_chunks[1],
        notification: main_chunks[2],
        footer: main_chunks[3],
    }
}

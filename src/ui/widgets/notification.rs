// src/ui/widgets/notification.rs
use crate::app::{App, NotificationKind};
use ratatui::{prelude::*, widgets::Paragraph};

/// Renders the current notification, if any, as a single colored line.
pub fn render_notification(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = &app.notification else {
        return;
    };
    let (icon, style) = match notification.kind {
        NotificationKind::Warning => ("⚠", Style::default().fg(Color::Yellow)),
        NotificationKind::Error => ("✗", Style::default().fg(Color::Red).bold()),
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", icon), style),
        Span::styled(notification.message.as_str(), style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

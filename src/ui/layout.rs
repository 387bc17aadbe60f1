//! Layout components (panels, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: form panel on the left, result panel on the
/// right, bottom line reserved for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Form
            Constraint::Percentage(45), // Result
        ])
        .split(chunks[0]);

    (content[0], content[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // API key status
    let key_status = if app.state.api_configured {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ GEMINI_API_KEY missing ", Style::default().fg(Color::Red))
    };
    spans.push(key_status);

    // Keyboard hints
    spans.push(Span::styled(
        format!("Tab:next  {SUBMIT_SHORTCUT}:optimize  {COPY_SHORTCUT}:copy  PgUp/PgDn:scroll"),
        Style::default().fg(Color::DarkGray),
    ));

    // In-flight indicator
    if app.state.submission.is_loading() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Optimizing...",
            Style::default().fg(Color::Yellow),
        ));
    }

    // Copy feedback
    if let Some(feedback) = &app.state.submission.copy_feedback {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            feedback.message.clone(),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

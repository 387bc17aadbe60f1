//! Result panel: the optimized prompt, an error, or the in-flight notice

use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the result panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let submission = &app.state.submission;

    let title = if submission.result.is_some() {
        format!(" Optimized Prompt ({COPY_SHORTCUT} to copy) ")
    } else {
        " Optimized Prompt ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = if submission.is_loading() {
        Paragraph::new("Optimizing...").style(Style::default().fg(Color::Yellow))
    } else if let Some(error) = &submission.error {
        Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red))
    } else if let Some(result) = &submission.result {
        Paragraph::new(result.as_str())
            .style(Style::default().fg(Color::Green))
            .scroll((app.state.scroll_offset as u16, 0))
    } else {
        Paragraph::new("The optimized prompt will appear here.")
            .style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}

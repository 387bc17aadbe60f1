//! Form panel: the initial prompt and the five follow-up questions

use crate::app::App;
use crate::state::{FormField, FIELD_COUNT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            field.hint,
            Style::default().fg(Color::DarkGray),
        )))
    } else if field.is_multiline {
        let mut lines = multiline_lines(&field.value);
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.clone(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Split a multiline value for rendering. `str::lines()` drops a trailing
/// empty line, which would leave the cursor on the previous line right
/// after the user presses Enter, so it is re-added here.
fn multiline_lines(value: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
    if value.ends_with('\n') {
        lines.push(Line::default());
    }
    lines
}

/// Draw the optimize form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Refine Your Prompt ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    if !form.show_followups() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Initial prompt
                Constraint::Length(1), // Hint
            ])
            .margin(1)
            .split(area);

        draw_field(frame, chunks[0], &form.initial_prompt, true);

        let hint = Paragraph::new("Enter a prompt to unlock the 5 refinement questions")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, chunks[1]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Initial prompt
            Constraint::Length(4), // Goal & output
            Constraint::Length(3), // Audience
            Constraint::Length(3), // Model or tool
            Constraint::Length(3), // Tone or style
            Constraint::Length(4), // Constraints
        ])
        .margin(1)
        .split(area);

    for index in 0..FIELD_COUNT {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field_index == index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_lines_splits_on_newlines() {
        let lines = multiline_lines("one\ntwo");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), "one");
        assert_eq!(lines[1].to_string(), "two");
    }

    #[test]
    fn test_multiline_lines_keeps_trailing_empty_line() {
        let lines = multiline_lines("one\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].to_string(), "");
    }

    #[test]
    fn test_multiline_lines_empty_value_has_no_lines() {
        assert!(multiline_lines("").is_empty());
    }
}

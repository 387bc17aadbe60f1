//! UI module for rendering the TUI

mod form;
mod layout;
mod result;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, result_area) = layout::create_layout(frame.area());

    form::draw(frame, form_area, app);
    result::draw(frame, result_area, app);

    layout::draw_status_bar(frame, app);
}

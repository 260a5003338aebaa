pub mod board_view;
pub mod edit_form;
pub mod header;
pub mod help_overlay;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | content | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // title + filter chips
            Constraint::Min(1),    // board
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    board_view::render_board_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Edit form modal (rendered on top of the board)
    if app.mode == Mode::Edit && app.edit.is_some() {
        edit_form::render_edit_form(frame, app, frame.area());
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

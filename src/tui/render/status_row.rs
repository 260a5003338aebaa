use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status_message {
                hint_line(app, &format!(" {message}"), "", width)
            } else {
                hint_line(
                    app,
                    "",
                    "n new \u{b7} e edit \u{b7} d del \u{b7} m move \u{b7} s status \u{b7} f filter \u{b7} Enter expand \u{b7} ? help \u{b7} q quit ",
                    width,
                )
            }
        }
        Mode::Move => hint_line(
            app,
            " MOVE",
            "j/k pick a drop zone \u{b7} Enter drop \u{b7} Esc cancel ",
            width,
        ),
        Mode::Edit => hint_line(
            app,
            " EDIT",
            "Tab/\u{2191}\u{2193} field \u{b7} \u{2190}\u{2192} choose \u{b7} Enter save \u{b7} Esc cancel ",
            width,
        ),
        Mode::Confirm => {
            let title = app
                .confirm
                .as_ref()
                .map(|c| c.title.clone())
                .unwrap_or_default();
            let prompt = Span::styled(
                format!(" delete \"{title}\"? "),
                Style::default()
                    .fg(app.theme.deadline)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            );
            let keys = Span::styled("y/n", Style::default().fg(app.theme.text).bg(bg));
            Line::from(vec![prompt, keys])
        }
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(bg)),
        area,
    );
}

/// Left-aligned label with a right-aligned dim hint
fn hint_line(app: &App, left: &str, hint: &str, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        left.to_string(),
        Style::default()
            .fg(app.theme.text)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let left_width = left.chars().count();
    let hint_width = hint.chars().count();
    if left_width + hint_width < width {
        let padding = width - left_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
    }
    spans.push(Span::styled(
        hint.to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    Line::from(spans)
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, EditForm, FormField};

/// Render the centered modal editor
pub fn render_edit_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.edit else {
        return;
    };
    let bg = app.theme.surface;

    let width = area.width.clamp(30, 64);
    // 6 fields at 3 lines each, inside the border
    let height = 20.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let title = if form.target.is_some() {
        " EDIT TASK "
    } else {
        " NEW TASK "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.faint).bg(bg))
        .title(Span::styled(
            title,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let inner_width = inner.width.saturating_sub(2) as usize;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let focus_label_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    for field in FormField::ALL {
        let focused = form.field == field;
        lines.push(Line::from(Span::styled(
            format!(" {}", field.label()),
            if focused { focus_label_style } else { label_style },
        )));
        lines.push(value_line(app, form, field, focused, inner_width));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}

fn value_line(
    app: &App,
    form: &EditForm,
    field: FormField,
    focused: bool,
    width: usize,
) -> Line<'static> {
    let bg = app.theme.surface;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let placeholder_style = Style::default().fg(app.theme.faint).bg(bg);

    match field {
        FormField::Priority => {
            let color = app.theme.tier(form.draft.priority);
            selector_line(form.draft.priority.label(), color, bg, focused)
        }
        FormField::Status => {
            let color = app.theme.status(form.draft.status);
            selector_line(form.draft.status.label(), color, bg, focused)
        }
        _ => {
            let value = match field {
                FormField::Title => &form.draft.title,
                FormField::Deadline => &form.draft.deadline,
                FormField::Details => &form.draft.details,
                FormField::Action => &form.draft.action,
                _ => unreachable!(),
            };
            if value.is_empty() && !focused {
                let hint = match field {
                    FormField::Title => "What needs to be decided or done?",
                    FormField::Deadline => "e.g. End of month, This Friday\u{2026}",
                    FormField::Details => "Background, options, blockers\u{2026}",
                    FormField::Action => "The very next concrete step\u{2026}",
                    _ => "",
                };
                return Line::from(Span::styled(format!(" {hint}"), placeholder_style));
            }
            if focused {
                let (shown, cursor_at) = visible_window(value, form.cursor, width.saturating_sub(2));
                let (before, after) = split_graphemes(&shown, cursor_at);
                Line::from(vec![
                    Span::styled(format!(" {before}"), text_style),
                    Span::styled(
                        "\u{258c}".to_string(),
                        Style::default().fg(app.theme.text).bg(bg),
                    ),
                    Span::styled(after, text_style),
                ])
            } else {
                Line::from(Span::styled(format!(" {value}"), text_style))
            }
        }
    }
}

fn selector_line(
    label: &str,
    color: ratatui::style::Color,
    bg: ratatui::style::Color,
    focused: bool,
) -> Line<'static> {
    let arrows = Style::default().fg(if focused { color } else { bg }).bg(bg);
    Line::from(vec![
        Span::styled(" \u{25c2} ".to_string(), arrows),
        Span::styled(label.to_string(), Style::default().fg(color).bg(bg)),
        Span::styled(" \u{25b8}".to_string(), arrows),
    ])
}

/// Slice a window of the value so the cursor stays inside the field
/// width. Returns the visible text and the cursor's grapheme index
/// within it.
fn visible_window(value: &str, cursor: usize, width: usize) -> (String, usize) {
    let graphemes: Vec<&str> = value.graphemes(true).collect();
    let cursor = cursor.min(graphemes.len());
    if value.width() < width || width == 0 {
        return (value.to_string(), cursor);
    }
    // Walk back from the cursor until the window is full
    let mut start = cursor;
    let mut used = 0;
    while start > 0 && used + graphemes[start - 1].width() < width {
        start -= 1;
        used += graphemes[start].width();
    }
    let mut end = cursor;
    while end < graphemes.len() && used + graphemes[end].width() < width {
        used += graphemes[end].width();
        end += 1;
    }
    (graphemes[start..end].concat(), cursor - start)
}

fn split_graphemes(text: &str, at: usize) -> (String, String) {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let at = at.min(graphemes.len());
    (graphemes[..at].concat(), graphemes[at..].concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_short_values_whole() {
        let (shown, at) = visible_window("hello", 2, 20);
        assert_eq!(shown, "hello");
        assert_eq!(at, 2);
    }

    #[test]
    fn window_follows_cursor_at_end() {
        let (shown, at) = visible_window("abcdefghij", 10, 5);
        assert!(shown.ends_with('j'));
        assert_eq!(at, shown.graphemes(true).count());
    }

    #[test]
    fn split_at_grapheme_boundary() {
        let (before, after) = split_graphemes("héllo", 2);
        assert_eq!(before, "hé");
        assert_eq!(after, "llo");
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::drag::DropTarget;
use crate::model::filter::status_counts;
use crate::model::task::{Priority, Task};
use crate::tui::app::{App, Mode, Row};
use crate::tui::wrap::wrap_text;

/// Render the grouped board: four tier groups, each with its header and
/// task rows, then the status summary footer.
pub fn render_board_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let rows = app.rows();
    let cursor_id = app.cursor_task_id();
    let source_id = app.drag.source().map(str::to_string);
    let hover = app.drag.target().cloned();
    let source_tier = source_id
        .as_deref()
        .and_then(|id| app.store.get(id))
        .map(|t| t.priority);

    let mut lines: Vec<Line> = Vec::new();
    // Line the viewport must keep visible: the cursor row, or the hover
    // target while a move is in flight
    let mut focus_line = 0usize;

    for (i, row) in rows.iter().enumerate() {
        match row {
            Row::TierHeader(tier) => {
                if i > 0 {
                    lines.push(Line::from(""));
                }
                let hovered = hover == Some(DropTarget::Tier(*tier));
                if hovered {
                    focus_line = lines.len();
                }
                lines.push(tier_header_line(app, *tier, hovered, source_tier));
            }
            Row::EmptyTier(tier) => {
                lines.push(empty_tier_line(app, *tier, hover.as_ref()));
            }
            Row::Task { id, tier } => {
                let Some(task) = app.store.get(id) else {
                    continue;
                };
                let is_cursor = app.mode != Mode::Move && cursor_id.as_deref() == Some(id.as_str());
                let is_source = source_id.as_deref() == Some(id.as_str());
                let is_target = hover == Some(DropTarget::Task(id.clone()));
                if is_cursor || is_target || (is_source && hover.is_none()) {
                    focus_line = lines.len();
                }
                lines.push(task_line(app, task, *tier, is_cursor, is_source, is_target));
                if app.expanded.contains(id) {
                    push_detail_lines(&mut lines, app, task, *tier, width);
                }
            }
        }
    }

    // Status summary footer
    if !app.store.is_empty() {
        lines.push(Line::from(""));
        lines.push(summary_line(app));
    }
    lines.push(Line::from(Span::styled(
        format!("  data saved in {}", app.data_dir.display()),
        Style::default().fg(app.theme.faint).bg(bg),
    )));

    // Keep the focused row in view
    let height = area.height as usize;
    if height > 0 {
        if focus_line < app.scroll_offset {
            app.scroll_offset = focus_line;
        } else if focus_line >= app.scroll_offset + height {
            app.scroll_offset = focus_line + 1 - height;
        }
        app.scroll_offset = app.scroll_offset.min(lines.len().saturating_sub(1));
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(height)
        .collect();
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().bg(bg)),
        area,
    );
}

fn tier_header_line(
    app: &App,
    tier: Priority,
    hovered: bool,
    source_tier: Option<Priority>,
) -> Line<'static> {
    let bg = app.theme.background;
    let color = app.theme.tier(tier);
    let mut style = Style::default().fg(color).bg(bg);
    if hovered {
        style = style.add_modifier(Modifier::BOLD);
    }
    let mut spans = vec![Span::styled(format!(" \u{25cf} {}", tier.label()), style)];
    if hovered {
        let hint = if source_tier == Some(tier) {
            Span::styled(
                "  \u{b7} current tier".to_string(),
                Style::default().fg(app.theme.dim).bg(bg),
            )
        } else {
            Span::styled(
                "  \u{2190} drop to move here".to_string(),
                Style::default()
                    .fg(color)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        };
        spans.push(hint);
    }
    Line::from(spans)
}

fn empty_tier_line(app: &App, tier: Priority, hover: Option<&DropTarget>) -> Line<'static> {
    let bg = app.theme.background;
    let hovered = hover == Some(&DropTarget::Tier(tier));
    let (text, color) = if app.drag.is_active() {
        let color = if hovered {
            app.theme.tier(tier)
        } else {
            app.theme.faint
        };
        ("   drop here to reprioritize", color)
    } else {
        ("   no tasks", app.theme.faint)
    };
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).bg(bg),
    ))
}

fn task_line(
    app: &App,
    task: &Task,
    tier: Priority,
    is_cursor: bool,
    is_source: bool,
    is_target: bool,
) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let tier_color = app.theme.tier(tier);

    let mut handle_style = Style::default().fg(app.theme.faint).bg(bg);
    let mut status_style = Style::default().fg(app.theme.status(task.status)).bg(bg);
    let mut title_style = Style::default().fg(app.theme.text).bg(bg);
    if is_source {
        // The task being moved renders ghosted until it is dropped
        handle_style = handle_style.add_modifier(Modifier::DIM);
        status_style = status_style.add_modifier(Modifier::DIM);
        title_style = Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::ITALIC);
    }
    if is_target {
        title_style = Style::default()
            .fg(tier_color)
            .bg(bg)
            .add_modifier(Modifier::UNDERLINED);
    }

    let marker = if is_target { " \u{2192} " } else { "  " };
    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(tier_color).bg(bg)),
        Span::styled("\u{28ff} ".to_string(), handle_style),
        Span::styled(format!("{} ", task.status.label()), status_style),
        Span::styled(format!(" {}", task.title), title_style),
    ];
    if let Some(deadline) = &task.deadline {
        spans.push(Span::styled(
            format!("  \u{23f0} {deadline}"),
            Style::default().fg(app.theme.deadline).bg(bg),
        ));
    }
    let chevron = if app.expanded.contains(&task.id) {
        " \u{25be}"
    } else {
        " \u{203a}"
    };
    spans.push(Span::styled(
        chevron.to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    Line::from(spans)
}

/// CONTEXT and NEXT ACTION blocks under an expanded task
fn push_detail_lines(lines: &mut Vec<Line<'static>>, app: &App, task: &Task, tier: Priority, width: usize) {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let body_width = width.saturating_sub(8).max(16);

    if let Some(details) = &task.details {
        lines.push(Line::from(Span::styled("      CONTEXT", label_style)));
        for part in wrap_text(details, body_width) {
            lines.push(Line::from(Span::styled(
                format!("      {part}"),
                Style::default().fg(app.theme.muted).bg(bg),
            )));
        }
    }
    if let Some(action) = &task.action {
        lines.push(Line::from(Span::styled("      NEXT ACTION", label_style)));
        let action_style = Style::default().fg(app.theme.tier(tier)).bg(bg);
        for (i, part) in wrap_text(action, body_width).into_iter().enumerate() {
            let prefix = if i == 0 { "      \u{2192} " } else { "        " };
            lines.push(Line::from(Span::styled(
                format!("{prefix}{part}"),
                action_style,
            )));
        }
    }
}

/// The status count footer: one colored dot + count per status seen
fn summary_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled("  ".to_string(), Style::default().bg(bg))];
    for (status, count) in status_counts(app.store.tasks()) {
        spans.push(Span::styled(
            "\u{25cf} ".to_string(),
            Style::default().fg(app.theme.status_dot(status)).bg(bg),
        ));
        spans.push(Span::styled(
            format!("{} ", status.label()),
            Style::default().fg(app.theme.muted).bg(bg),
        ));
        spans.push(Span::styled(
            format!("{count}   "),
            Style::default().fg(app.theme.status(status)).bg(bg),
        ));
    }
    Line::from(spans)
}

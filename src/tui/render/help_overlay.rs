use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width.clamp(30, 52);
    let height = 20.min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, overlay);

    let bg = app.theme.surface;
    let key_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.muted).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.dim)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" NAVIGATE", header_style)));
    binding(&mut lines, " j/k \u{2191}\u{2193}", "move cursor", key_style, desc_style);
    binding(&mut lines, " g/G", "first / last task", key_style, desc_style);
    binding(&mut lines, " Enter/Space", "expand or collapse detail", key_style, desc_style);
    binding(&mut lines, " f", "cycle priority filter", key_style, desc_style);
    binding(&mut lines, " a", "show all tiers", key_style, desc_style);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" TASKS", header_style)));
    binding(&mut lines, " n", "new task", key_style, desc_style);
    binding(&mut lines, " e", "edit task", key_style, desc_style);
    binding(&mut lines, " d", "delete task (asks first)", key_style, desc_style);
    binding(&mut lines, " s", "cycle status", key_style, desc_style);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" MOVE", header_style)));
    binding(&mut lines, " m", "pick up task", key_style, desc_style);
    binding(&mut lines, " j/k", "hover a tier or task", key_style, desc_style);
    binding(&mut lines, " Enter", "drop (reorder / reprioritize)", key_style, desc_style);
    binding(&mut lines, " Esc", "put it back", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.faint).bg(bg))
        .title(Span::styled(" HELP ", header_style))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay,
    );
}

fn binding(
    lines: &mut Vec<Line<'static>>,
    key: &str,
    desc: &str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{key:<14}"), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

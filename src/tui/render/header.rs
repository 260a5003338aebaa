use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filter::Filter;
use crate::tui::app::App;

/// Render the title block and the filter chips
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let title = Line::from(Span::styled(
        " L I F E   B A C K L O G",
        Style::default()
            .fg(app.theme.text)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    let count = app.store.len();
    let subtitle = Line::from(Span::styled(
        format!(" {count} tasks \u{b7} move tasks between priority groups to reprioritize"),
        dim,
    ));

    let lines = vec![
        Line::from(Span::styled(" PERSONAL DECISION TOOL", dim)),
        title,
        subtitle,
        filter_chips(app),
    ];

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// One chip per filter key; the active one renders inverted
fn filter_chips(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for filter in Filter::ALL {
        let color = match filter {
            Filter::All => app.theme.muted,
            Filter::Tier(p) => app.theme.tier(p),
        };
        let style = if app.filter == filter {
            Style::default()
                .fg(bg)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    Line::from(spans)
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::drag::DropTarget;

use crate::tui::app::{App, Mode};

use super::*;

/// Pick up the task under the cursor (Navigate → Move).
pub(super) fn enter_move_mode(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    if app.drag.begin(&id) {
        app.move_cursor = None;
        app.mode = Mode::Move;
    }
}

pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Drop onto the current target
        (_, KeyCode::Enter) | (_, KeyCode::Char('m')) => {
            let source = app.drag.source().map(str::to_string);
            app.drag.commit(&mut app.store);
            app.move_cursor = None;
            app.mode = Mode::Navigate;
            if let Some(id) = source {
                app.move_cursor_to(&id);
            }
        }
        // Abort: no mutation, cursor stays where the move began
        (_, KeyCode::Esc) => {
            app.drag.cancel();
            app.move_cursor = None;
            app.mode = Mode::Navigate;
        }
        // Walk the candidate drop zones
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            step_target(app, 1);
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            step_target(app, -1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            jump_target(app, true);
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            jump_target(app, false);
        }
        _ => {}
    }
}

/// Hover the next/previous drop zone. Stepping up from the first zone
/// leaves all zones (back to a bare drag, which commits as abandoned).
fn step_target(app: &mut App, direction: i32) {
    let targets = app.drop_targets();
    if targets.is_empty() {
        return;
    }
    let next: Option<usize> = match (app.move_cursor, direction) {
        (None, d) if d > 0 => Some(0),
        (None, _) => None,
        (Some(0), d) if d < 0 => None,
        (Some(i), d) if d < 0 => Some(i - 1),
        (Some(i), _) => Some((i + 1).min(targets.len() - 1)),
    };
    apply_target(app, &targets, next);
}

fn jump_target(app: &mut App, to_top: bool) {
    let targets = app.drop_targets();
    if targets.is_empty() {
        return;
    }
    let next = if to_top { 0 } else { targets.len() - 1 };
    apply_target(app, &targets, Some(next));
}

fn apply_target(app: &mut App, targets: &[DropTarget], next: Option<usize>) {
    app.move_cursor = next;
    match next {
        Some(idx) => app.drag.hover(targets[idx].clone()),
        None => app.drag.leave(),
    }
}

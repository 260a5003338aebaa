use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::filter::Filter;
use crate::model::store::TaskDraft;

use crate::tui::app::{App, ConfirmState, EditForm, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? / Esc / q
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            let count = app.visible_task_ids().len();
            if count > 0 && app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            let count = app.visible_task_ids().len();
            app.cursor = count.saturating_sub(1);
        }

        // Expand / collapse detail
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            if let Some(id) = app.cursor_task_id() {
                app.toggle_expanded(&id);
            }
        }

        // Filter chips: f cycles, a jumps back to All
        (KeyModifiers::NONE, KeyCode::Char('f')) => {
            set_filter(app, app.filter.next());
        }
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            set_filter(app, Filter::All);
        }

        // New / edit / delete
        (KeyModifiers::NONE, KeyCode::Char('n')) => {
            app.edit = Some(EditForm::new_task());
            app.mode = Mode::Edit;
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if let Some(task) = app.cursor_task() {
                app.edit = Some(EditForm::edit(task));
                app.mode = Mode::Edit;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(task) = app.cursor_task() {
                app.confirm = Some(ConfirmState {
                    id: task.id.clone(),
                    title: task.title.clone(),
                });
                app.mode = Mode::Confirm;
            }
        }

        // Quick status cycle on the task under the cursor
        (KeyModifiers::NONE, KeyCode::Char('s')) => {
            cycle_status(app);
        }

        // Pick up the task under the cursor
        (KeyModifiers::NONE, KeyCode::Char('m')) => {
            enter_move_mode(app);
        }

        _ => {}
    }
}

fn set_filter(app: &mut App, filter: Filter) {
    if app.filter == filter {
        return;
    }
    // Try to keep the cursor on the same task across the change
    let keep = app.cursor_task_id();
    app.filter = filter;
    match keep {
        Some(id) => app.move_cursor_to(&id),
        None => app.clamp_cursor(),
    }
}

/// Advance the status of the task under the cursor. Statuses carry no
/// transition rules, so this just walks the selector order.
fn cycle_status(app: &mut App) {
    let Some(task) = app.cursor_task() else {
        return;
    };
    let id = task.id.clone();
    let mut draft = TaskDraft::from_task(task);
    draft.status = draft.status.next();
    let label = draft.status.label();
    if app.store.update(&id, &draft) {
        app.status_message = Some(format!("status \u{2192} {label}"));
    }
}

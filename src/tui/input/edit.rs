use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, FormField, Mode};

use super::*;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(form) = &mut app.edit else {
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.edit = None;
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => {
            save_form(app);
        }

        // Field traversal
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Down) => {
            let next = form.field.next();
            form.focus(next);
        }
        (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Up) => {
            let prev = form.field.prev();
            form.focus(prev);
        }

        // Selector fields cycle; text fields move the cursor
        (KeyModifiers::NONE, KeyCode::Left) => match form.field {
            FormField::Priority => form.draft.priority = form.draft.priority.prev(),
            FormField::Status => form.draft.status = form.draft.status.prev(),
            _ => form.cursor = form.cursor.saturating_sub(1),
        },
        (KeyModifiers::NONE, KeyCode::Right) => match form.field {
            FormField::Priority => form.draft.priority = form.draft.priority.next(),
            FormField::Status => form.draft.status = form.draft.status.next(),
            _ => {
                let len = form.text().map(|t| t.graphemes(true).count()).unwrap_or(0);
                form.cursor = (form.cursor + 1).min(len);
            }
        },
        (_, KeyCode::Home) => form.cursor = 0,
        (_, KeyCode::End) => {
            form.cursor = form.text().map(|t| t.graphemes(true).count()).unwrap_or(0);
        }

        // Text editing
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let cursor = form.cursor;
            if let Some(text) = form.text_mut() {
                let offset = grapheme_offset(text, cursor);
                text.insert(offset, c);
                form.cursor = cursor + 1;
            }
        }
        (_, KeyCode::Backspace) => {
            let cursor = form.cursor;
            if cursor > 0
                && let Some(text) = form.text_mut()
            {
                let start = grapheme_offset(text, cursor - 1);
                let end = grapheme_offset(text, cursor);
                text.replace_range(start..end, "");
                form.cursor = cursor - 1;
            }
        }
        (_, KeyCode::Delete) => {
            let cursor = form.cursor;
            if let Some(text) = form.text_mut() {
                let len = text.graphemes(true).count();
                if cursor < len {
                    let start = grapheme_offset(text, cursor);
                    let end = grapheme_offset(text, cursor + 1);
                    text.replace_range(start..end, "");
                }
            }
        }
        _ => {}
    }
}

/// Byte offset of the nth grapheme (end of string when n exceeds it)
fn grapheme_offset(text: &str, n: usize) -> usize {
    text.grapheme_indices(true)
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Commit the form through the store. An empty title is silently
/// rejected and the form stays open with its contents for correction.
fn save_form(app: &mut App) {
    let Some(form) = &app.edit else {
        return;
    };
    if !form.draft.is_valid() {
        return;
    }

    let saved_id = match &form.target {
        None => app.store.create(&form.draft),
        Some(id) => {
            if app.store.update(id, &form.draft) {
                Some(id.clone())
            } else {
                // The task vanished underneath the form (benign race)
                None
            }
        }
    };

    app.edit = None;
    app.mode = Mode::Navigate;
    if let Some(id) = saved_id {
        app.move_cursor_to(&id);
        app.status_message = Some("saved".to_string());
    }
    app.clamp_cursor();
}

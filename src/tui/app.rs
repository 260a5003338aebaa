use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use unicode_segmentation::UnicodeSegmentation;

use crate::io::config_io::read_config;
use crate::io::storage::Storage;
use crate::model::drag::{DragState, DropTarget};
use crate::model::filter::{Filter, tier_groups};
use crate::model::store::{TaskDraft, TaskStore};
use crate::model::task::{Priority, Task};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Move,
    Edit,
    Confirm,
}

/// One row of the board: a tier header, the placeholder for an empty
/// tier, or a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    TierHeader(Priority),
    EmptyTier(Priority),
    Task { id: String, tier: Priority },
}

/// Fields of the edit form, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Deadline,
    Details,
    Action,
    Priority,
    Status,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Deadline,
        FormField::Details,
        FormField::Action,
        FormField::Priority,
        FormField::Status,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "TITLE",
            FormField::Deadline => "DEADLINE",
            FormField::Details => "CONTEXT",
            FormField::Action => "NEXT ACTION",
            FormField::Priority => "PRIORITY",
            FormField::Status => "STATUS",
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, FormField::Priority | FormField::Status)
    }

    pub fn next(self) -> FormField {
        let idx = FormField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FormField::ALL[(idx + 1) % FormField::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        let idx = FormField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FormField::ALL[(idx + FormField::ALL.len() - 1) % FormField::ALL.len()]
    }
}

/// The modal editor state: a draft plus which field has focus. `target`
/// is None for a new task, or the id being edited.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub target: Option<String>,
    pub draft: TaskDraft,
    pub field: FormField,
    /// Grapheme index of the text cursor within the focused text field
    pub cursor: usize,
}

impl EditForm {
    /// Blank template for a new task
    pub fn new_task() -> Self {
        EditForm {
            target: None,
            draft: TaskDraft::default(),
            field: FormField::Title,
            cursor: 0,
        }
    }

    /// Seed the form from an existing task
    pub fn edit(task: &Task) -> Self {
        let draft = TaskDraft::from_task(task);
        let cursor = draft.title.graphemes(true).count();
        EditForm {
            target: Some(task.id.clone()),
            draft,
            field: FormField::Title,
            cursor,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self.field {
            FormField::Title => Some(&self.draft.title),
            FormField::Deadline => Some(&self.draft.deadline),
            FormField::Details => Some(&self.draft.details),
            FormField::Action => Some(&self.draft.action),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.draft.title),
            FormField::Deadline => Some(&mut self.draft.deadline),
            FormField::Details => Some(&mut self.draft.details),
            FormField::Action => Some(&mut self.draft.action),
            _ => None,
        }
    }

    /// Move focus, resetting the text cursor to the end of the new field
    pub fn focus(&mut self, field: FormField) {
        self.field = field;
        self.cursor = self
            .text()
            .map(|t| t.graphemes(true).count())
            .unwrap_or(0);
    }
}

/// A pending delete awaiting explicit confirmation
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub id: String,
    pub title: String,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub data_dir: PathBuf,
    pub theme: Theme,
    pub mode: Mode,
    pub filter: Filter,
    /// Expanded task ids. Process-local, reset on launch, never persisted
    pub expanded: HashSet<String>,
    /// Cursor index into the visible task list
    pub cursor: usize,
    /// First visible content line (managed by the board renderer)
    pub scroll_offset: usize,
    pub drag: DragState,
    /// Index into drop_targets() while a move is in flight; None = no
    /// candidate zone yet
    pub move_cursor: Option<usize>,
    pub edit: Option<EditForm>,
    pub confirm: Option<ConfirmState>,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TaskStore, data_dir: PathBuf, theme: Theme) -> Self {
        App {
            store,
            data_dir,
            theme,
            mode: Mode::Navigate,
            filter: Filter::All,
            expanded: HashSet::new(),
            cursor: 0,
            scroll_offset: 0,
            drag: DragState::default(),
            move_cursor: None,
            edit: None,
            confirm: None,
            show_help: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// Board rows under the current filter. Every tier renders a header
    /// (empty tiers stay visible as drop zones).
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (tier, group) in tier_groups(self.store.tasks(), self.filter) {
            rows.push(Row::TierHeader(tier));
            if group.is_empty() {
                rows.push(Row::EmptyTier(tier));
            } else {
                for task in group {
                    rows.push(Row::Task {
                        id: task.id.clone(),
                        tier,
                    });
                }
            }
        }
        rows
    }

    /// Visible task ids in display order (what the cursor walks)
    pub fn visible_task_ids(&self) -> Vec<String> {
        self.rows()
            .into_iter()
            .filter_map(|row| match row {
                Row::Task { id, .. } => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn cursor_task_id(&self) -> Option<String> {
        self.visible_task_ids().get(self.cursor).cloned()
    }

    pub fn cursor_task(&self) -> Option<&Task> {
        let ids = self.visible_task_ids();
        let id = ids.get(self.cursor)?;
        self.store.get(id)
    }

    /// Candidate drop zones in display order: tier headers and other
    /// tasks' rows. The source task is not its own target.
    pub fn drop_targets(&self) -> Vec<DropTarget> {
        let source = self.drag.source().map(str::to_string);
        self.rows()
            .into_iter()
            .filter_map(|row| match row {
                Row::TierHeader(tier) => Some(DropTarget::Tier(tier)),
                Row::EmptyTier(_) => None,
                Row::Task { id, .. } => {
                    if Some(&id) == source.as_ref() {
                        None
                    } else {
                        Some(DropTarget::Task(id))
                    }
                }
            })
            .collect()
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Keep the cursor inside the visible list after mutations or filter
    /// changes
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_task_ids().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Park the cursor on the task with the given id, if visible
    pub fn move_cursor_to(&mut self, id: &str) {
        if let Some(idx) = self.visible_task_ids().iter().position(|i| i == id) {
            self.cursor = idx;
        } else {
            self.clamp_cursor();
        }
    }
}

/// Run the TUI application against the given data directory
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(data_dir);
    let theme = Theme::from_config(&config.ui);
    let store = TaskStore::open(Storage::new(data_dir.to_path_buf()));
    let mut app = App::new(store, data_dir.to_path_buf(), theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

use uuid::Uuid;

use crate::io::storage::Storage;
use crate::model::task::{Priority, Status, Task};

/// A candidate record handed to the store by an editor collaborator
/// (the TUI form or the CLI). The store treats the title as untrusted
/// and re-validates it on every create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub priority: Priority,
    pub status: Status,
    pub title: String,
    pub deadline: String,
    pub details: String,
    pub action: String,
}

impl Default for TaskDraft {
    /// The blank template used to seed a "new task" form
    fn default() -> Self {
        TaskDraft {
            priority: Priority::High,
            status: Status::Todo,
            title: String::new(),
            deadline: String::new(),
            details: String::new(),
            action: String::new(),
        }
    }
}

impl TaskDraft {
    /// Seed a draft from an existing task (for the edit form)
    pub fn from_task(task: &Task) -> Self {
        TaskDraft {
            priority: task.priority,
            status: task.status,
            title: task.title.clone(),
            deadline: task.deadline.clone().unwrap_or_default(),
            details: task.details.clone().unwrap_or_default(),
            action: task.action.clone().unwrap_or_default(),
        }
    }

    /// Whether the draft would pass title validation
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    fn apply_to(&self, task: &mut Task) {
        task.priority = self.priority;
        task.status = self.status;
        task.title = self.title.trim().to_string();
        task.deadline = normalize(&self.deadline);
        task.details = normalize(&self.details);
        task.action = normalize(&self.action);
    }
}

/// Empty or whitespace-only optional fields collapse to None so the
/// persisted document has one canonical representation for "absent".
fn normalize(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// The authoritative ordered task collection. Order is the persisted sort
/// order within and across tiers. Every mutation re-serializes the full
/// collection through the storage slot before returning.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Storage,
}

impl TaskStore {
    /// Load the collection from storage (saved data, or the seed set).
    pub fn open(storage: Storage) -> Self {
        let tasks = storage.load();
        TaskStore { tasks, storage }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a new task from a validated draft. Returns the assigned id,
    /// or None when the title is empty after trimming (silent rejection;
    /// the editor collaborator keeps its form open for correction).
    pub fn create(&mut self, draft: &TaskDraft) -> Option<String> {
        if !draft.is_valid() {
            return None;
        }
        let id = Uuid::new_v4().to_string();
        let mut task = Task::new(id.clone(), draft.priority, draft.status, String::new());
        draft.apply_to(&mut task);
        self.tasks.push(task);
        self.persist();
        Some(id)
    }

    /// Replace the record matching `id` with the draft's fields, id
    /// unchanged. No-op when the id is gone (benign race with a concurrent
    /// deletion) or the title is invalid.
    pub fn update(&mut self, id: &str, draft: &TaskDraft) -> bool {
        if !draft.is_valid() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        draft.apply_to(task);
        self.persist();
        true
    }

    /// Remove the record matching `id`, preserving the relative order of
    /// the rest. No-op if absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.tasks.remove(idx);
        self.persist();
        true
    }

    /// Set `priority` on the task with `id`. The task's position in the
    /// sequence is unchanged; it "moves" groups only through filtering.
    pub fn reprioritize(&mut self, id: &str, priority: Priority) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if task.priority == priority {
            return false;
        }
        task.priority = priority;
        self.persist();
        true
    }

    /// Remove the source task and reinsert it immediately before the
    /// target's current position. No-op if either id is missing or
    /// source == target.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> bool {
        if source_id == target_id {
            return false;
        }
        let Some(from) = self.position(source_id) else {
            return false;
        };
        if self.position(target_id).is_none() {
            return false;
        }
        let task = self.tasks.remove(from);
        // Target index after removal, i.e. the slot immediately before it
        let to = self.position(target_id).unwrap_or(self.tasks.len());
        self.tasks.insert(to, task);
        self.persist();
        true
    }

    fn persist(&self) {
        self.storage.save(&self.tasks);
    }
}

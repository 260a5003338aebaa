use std::fs;
use std::path::{Path, PathBuf};

use crate::model::task::{Priority, Status, Task};

/// The single named slot holding the serialized collection. Versioned so a
/// future format change can use a fresh slot instead of migrating in place.
pub const SLOT_FILE: &str = "life-backlog-v1.json";

/// Error type for slot I/O. Callers of `load`/`save` never see these
/// (persistence is best-effort), but the CLI surfaces them from
/// `try_save` when an explicit write was requested.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence adapter for the task collection: one JSON document in a
/// data directory, written as a full snapshot on every mutation.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: PathBuf) -> Self {
        Storage { dir }
    }

    pub fn slot_path(&self) -> PathBuf {
        self.dir.join(SLOT_FILE)
    }

    /// Read and decode the saved collection. Any failure (absent file,
    /// unreadable file, malformed JSON) falls back to the seed set.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Some(tasks) => tasks,
            None => seed_tasks(),
        }
    }

    fn try_load(&self) -> Option<Vec<Task>> {
        let content = fs::read_to_string(self.slot_path()).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Encode and write the full collection. Failures are swallowed:
    /// a full disk or read-only directory must never interrupt the
    /// interactive session.
    pub fn save(&self, tasks: &[Task]) {
        let _ = self.try_save(tasks);
    }

    /// Fallible save, for callers that want to report the outcome.
    pub fn try_save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io {
            path: self.dir.clone(),
            source: e,
        })?;
        let content = serde_json::to_string_pretty(tasks)?;
        // Write the snapshot to a sibling temp file first so a failed
        // write can never truncate the slot.
        let tmp = self.dir.join(format!("{SLOT_FILE}.tmp"));
        fs::write(&tmp, content).map_err(|e| StorageError::Io {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, self.slot_path()).map_err(|e| StorageError::Io {
            path: self.slot_path(),
            source: e,
        })
    }
}

/// The fixed example collection used when no persisted data exists.
pub fn seed_tasks() -> Vec<Task> {
    fn task(
        id: &str,
        priority: Priority,
        status: Status,
        title: &str,
        deadline: Option<&str>,
        details: &str,
        action: &str,
    ) -> Task {
        Task {
            id: id.into(),
            priority,
            status,
            title: title.into(),
            deadline: deadline.map(String::from),
            details: Some(details.into()),
            action: Some(action.into()),
        }
    }

    vec![
        task(
            "1",
            Priority::Urgent,
            Status::DecisionNeeded,
            "Decide: Accept job offer or keep searching",
            Some("This Friday"),
            "Received offer from Company X. Salary is 10% below target but role is interesting. Counter-offer possible.",
            "Calculate minimum acceptable salary and send counter-offer by Thursday.",
        ),
        task(
            "2",
            Priority::Urgent,
            Status::Todo,
            "Renew apartment lease",
            Some("End of month"),
            "Lease expires in 6 weeks. Landlord wants decision by end of month. Alternative: find new place.",
            "Call landlord and confirm intention or start flat search.",
        ),
        task(
            "3",
            Priority::High,
            Status::Waiting,
            "Sort health insurance plan",
            None,
            "Open enrollment ends soon. Need to compare current plan vs new options. Waiting for employer HR doc.",
            "Follow up with HR, then compare plans on government portal.",
        ),
        task(
            "4",
            Priority::Medium,
            Status::InProgress,
            "Learn a new skill (language / coding / design)",
            None,
            "Started Spanish on Duolingo 3 weeks ago. Consistency is the challenge. 15 min/day goal.",
            "Block daily 15-min slot in calendar. Review progress at end of month.",
        ),
        task(
            "5",
            Priority::Longterm,
            Status::Backlog,
            "Buy property",
            None,
            "Long-term goal. Need stable income and 20% down payment first. Market research ongoing.",
            "Open dedicated savings account. Set monthly savings target.",
        ),
    ]
}

/// Resolve the default data directory: `$BACKLOG_DIR`, else `~/.backlog`,
/// else `.backlog` in the working directory.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("BACKLOG_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var_os("HOME") {
        Some(home) => Path::new(&home).join(".backlog"),
        None => PathBuf::from(".backlog"),
    }
}

use serde::{Deserialize, Serialize};

/// Priority tier. Determines which group a task renders in, nothing else;
/// intra-group order comes from the task's position in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Longterm,
}

impl Priority {
    /// All tiers in display order (urgent first)
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Longterm,
    ];

    /// The serialized/CLI key for this tier
    pub fn key(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Longterm => "longterm",
        }
    }

    /// Parse a tier key (as used on the CLI and in the persisted document)
    pub fn from_key(key: &str) -> Option<Priority> {
        match key {
            "urgent" => Some(Priority::Urgent),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "longterm" => Some(Priority::Longterm),
            _ => None,
        }
    }

    /// Display label for group headers and filter chips
    pub fn label(self) -> &'static str {
        match self {
            Priority::Urgent => "URGENT",
            Priority::High => "HIGH PRIORITY",
            Priority::Medium => "MEDIUM TERM",
            Priority::Longterm => "LONGER TERM",
        }
    }

    /// Next tier in display order, wrapping around
    pub fn next(self) -> Priority {
        match self {
            Priority::Urgent => Priority::High,
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Longterm,
            Priority::Longterm => Priority::Urgent,
        }
    }

    /// Previous tier in display order, wrapping around
    pub fn prev(self) -> Priority {
        match self {
            Priority::Urgent => Priority::Longterm,
            Priority::High => Priority::Urgent,
            Priority::Medium => Priority::High,
            Priority::Longterm => Priority::Medium,
        }
    }
}

/// Workflow status. Purely descriptive: any status may change to any other,
/// there are no enforced transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "TO DO")]
    Todo,
    #[serde(rename = "DECISION NEEDED")]
    DecisionNeeded,
    #[serde(rename = "IN PROGRESS")]
    InProgress,
    #[serde(rename = "WAITING")]
    Waiting,
    #[serde(rename = "BLOCKED")]
    Blocked,
    #[serde(rename = "DONE")]
    Done,
    #[serde(rename = "BACKLOG")]
    Backlog,
}

impl Status {
    /// All statuses in the order they appear in selectors
    pub const ALL: [Status; 7] = [
        Status::Todo,
        Status::DecisionNeeded,
        Status::InProgress,
        Status::Waiting,
        Status::Blocked,
        Status::Done,
        Status::Backlog,
    ];

    /// Display label (same string as the serialized form)
    pub fn label(self) -> &'static str {
        match self {
            Status::Todo => "TO DO",
            Status::DecisionNeeded => "DECISION NEEDED",
            Status::InProgress => "IN PROGRESS",
            Status::Waiting => "WAITING",
            Status::Blocked => "BLOCKED",
            Status::Done => "DONE",
            Status::Backlog => "BACKLOG",
        }
    }

    /// Parse a status label, case-insensitively
    pub fn from_label(label: &str) -> Option<Status> {
        let upper = label.trim().to_uppercase();
        Status::ALL.into_iter().find(|s| s.label() == upper)
    }

    /// Next status in selector order, wrapping around
    pub fn next(self) -> Status {
        let idx = Status::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Status::ALL[(idx + 1) % Status::ALL.len()]
    }

    /// Previous status in selector order, wrapping around
    pub fn prev(self) -> Status {
        let idx = Status::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Status::ALL[(idx + Status::ALL.len() - 1) % Status::ALL.len()]
    }
}

/// A single tracked item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation and never reused
    pub id: String,
    pub priority: Priority,
    pub status: Status,
    /// Display text, never empty after trimming
    pub title: String,
    /// Free-text deadline label ("End of month"); None means no deadline
    #[serde(default)]
    pub deadline: Option<String>,
    /// Free-text background/context
    #[serde(default)]
    pub details: Option<String>,
    /// The very next concrete step
    #[serde(default)]
    pub action: Option<String>,
}

impl Task {
    pub fn new(id: String, priority: Priority, status: Status, title: String) -> Self {
        Task {
            id,
            priority,
            status,
            title,
            deadline: None,
            details: None,
            action: None,
        }
    }
}

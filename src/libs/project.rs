//! Project, task, and idea record types shared across the application.
//!
//! These are the plain data shapes exchanged with the remote document store
//! and consumed by the progress engine and the table views. Status and
//! priority are single enums carrying both their storage token (the wire
//! value persisted by the backend) and their localized display label, so
//! adding a variant is a compile-time-checked change in both directions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project lifecycle status.
///
/// Serializes to the fixed wire tokens `pending`, `in_progress`, and
/// `completed` used by the backend; displays as the localized labels
/// shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    /// The wire value persisted to and queried from the store.
    pub fn token(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }

    /// The localized label shown in list views and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Por hacer",
            Status::InProgress => "En progreso",
            Status::Completed => "Terminado",
        }
    }

    pub fn from_token(token: &str) -> Option<Status> {
        match token {
            "pending" => Some(Status::Pending),
            "in_progress" => Some(Status::InProgress),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }
}

/// Project priority.
///
/// The localized label doubles as the storage token: existing documents
/// persist `Alta`/`Media`/`Baja` verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Alta")]
    High,
    #[default]
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Baja")]
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// The wire value persisted to the store.
    pub fn token(&self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Media",
            Priority::Low => "Baja",
        }
    }

    /// The label shown to users. Identical to the token today; kept as a
    /// separate mapping so display text can diverge from stored values.
    pub fn label(&self) -> &'static str {
        self.token()
    }

    pub fn from_token(token: &str) -> Option<Priority> {
        match token.to_lowercase().as_str() {
            "alta" => Some(Priority::High),
            "media" => Some(Priority::Medium),
            "baja" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// A single task inside a project.
///
/// Tasks are owned by exactly one project and ordered by creation time
/// ascending. The store assigns `id` and `created_at` on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(text: &str) -> Self {
        Task {
            id: String::new(),
            text: text.to_string(),
            completed: false,
            created_at: None,
        }
    }
}

/// A free-form idea note attached to a project. No timestamps, no
/// completion state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    #[serde(default)]
    pub id: String,
    pub text: String,
}

/// A project document as stored by the backend.
///
/// `due_date` is kept in its persisted textual form `D/MonthName/YYYY`
/// (see [`crate::libs::date`]); tasks live in a subcollection and are
/// fetched separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub client_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub ideas: Vec<Idea>,
}

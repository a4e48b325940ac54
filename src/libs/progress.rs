//! Progress and status derivation for projects.
//!
//! This module is the pure core of the application: given a project's task
//! list it computes a completion percentage, derives an advisory status from
//! that percentage, and decides whether to suggest a status transition to
//! the user. None of these functions touch the store — the caller presents
//! the suggestion and, if accepted, issues the status mutation itself.
//!
//! ## Progress Formula
//!
//! ```text
//! Progress = round(100 * Completed Tasks / Total Tasks)
//!
//! Where:
//! - An empty task list yields 0 (defined zero-division policy)
//! - Rounding is arithmetic (round-half-up), never truncation
//! ```
//!
//! ## Status Thresholds
//!
//! Evaluated in this precedence order:
//! 1. exactly 100 → completed
//! 2. greater than 0 → in progress
//! 3. otherwise → pending
//!
//! Out-of-range percentages are intentionally not clamped: negative values
//! resolve to pending and values above 100 (other than exactly 100) resolve
//! to in progress. Callers that need different semantics must validate
//! before calling.
//!
//! ## Suggestions
//!
//! Suggestions only ever move a project forward. Un-completing tasks while
//! a project is marked completed produces no suggestion to revert — a
//! deliberate product behavior, not an omission.

use crate::libs::messages::Message;
use crate::libs::project::{Status, Task};

/// An advisory status transition for the user to confirm or dismiss.
///
/// Produced by [`suggest_status_change`]; carries the proposed status and a
/// confirmation-style message ready for display. Applying the transition is
/// the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSuggestion {
    /// The status the project should move to.
    pub suggested: Status,
    /// Localized confirmation prompt explaining the suggestion.
    pub message: String,
}

/// Computes the completion percentage of a task list.
///
/// Returns an integer in `[0, 100]`: the share of completed tasks, rounded
/// arithmetically. An empty list yields `0` rather than an error.
///
/// # Examples
///
/// ```rust
/// use proman::libs::progress::calculate_progress;
/// use proman::libs::project::Task;
///
/// assert_eq!(calculate_progress(&[]), 0);
///
/// let mut tasks = vec![Task::new("a"), Task::new("b"), Task::new("c")];
/// tasks[0].completed = true;
/// assert_eq!(calculate_progress(&tasks), 33);
/// ```
pub fn calculate_progress(tasks: &[Task]) -> i32 {
    if tasks.is_empty() {
        return 0;
    }

    let completed = tasks.iter().filter(|task| task.completed).count();
    ((completed as f64 / tasks.len() as f64) * 100.0).round() as i32
}

/// Derives the advisory status for a progress percentage.
///
/// The value is not validated or clamped; out-of-range inputs fall through
/// the same precedence rules.
pub fn project_status(progress: i32) -> Status {
    if progress == 100 {
        return Status::Completed;
    }
    if progress > 0 {
        return Status::InProgress;
    }
    Status::Pending
}

/// Suggests a forward status transition based on task completion.
///
/// Returns `None` when the task list is empty, when the stored status
/// already matches the progress, or when the only applicable transition
/// would move the project backward.
pub fn suggest_status_change(tasks: &[Task], current: Status) -> Option<StatusSuggestion> {
    if tasks.is_empty() {
        return None;
    }

    let progress = calculate_progress(tasks);

    // Every task is done but the project is not yet marked completed.
    if progress == 100 && current != Status::Completed {
        return Some(StatusSuggestion {
            suggested: Status::Completed,
            message: Message::SuggestMarkCompleted.to_string(),
        });
    }

    // Work has started on a project that is still marked pending.
    if progress > 0 && progress < 100 && current == Status::Pending {
        return Some(StatusSuggestion {
            suggested: Status::InProgress,
            message: Message::SuggestMarkInProgress.to_string(),
        });
    }

    None
}

//! Task management commands and the advisory status loop.
//!
//! After a task's completion state changes, the progress engine is asked
//! for a status suggestion; when it produces one, the user is prompted and,
//! on acceptance, the status mutation is issued against the store. The
//! engine itself never writes — status stays user controlled.

use crate::api::Store;
use crate::commands::project::resolve_project;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::progress::suggest_status_change;
use crate::libs::project::{Project, Task};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task to a project
    Add {
        /// Project ID or name
        project: String,
        /// Task text (prompted when omitted)
        text: Option<String>,
    },
    /// List a project's tasks
    List {
        /// Project ID or name
        project: String,
    },
    /// Mark a task as completed
    Done {
        /// Project ID or name
        project: String,
        /// Task ID or exact text
        task: String,
    },
    /// Reopen a completed task
    Undone {
        /// Project ID or name
        project: String,
        /// Task ID or exact text
        task: String,
    },
    /// Delete a task
    Delete {
        /// Project ID or name
        project: String,
        /// Task ID or exact text
        task: String,
    },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = Store::new(&config.backend_or_bail()?);

    match args.command {
        TaskCommand::Add { project, text } => handle_add(&mut store, &project, text).await,
        TaskCommand::List { project } => handle_list(&mut store, &project).await,
        TaskCommand::Done { project, task } => handle_toggle(&mut store, &project, &task, true).await,
        TaskCommand::Undone { project, task } => handle_toggle(&mut store, &project, &task, false).await,
        TaskCommand::Delete { project, task } => handle_delete(&mut store, &project, &task).await,
    }
}

fn find_task<'a>(tasks: &'a [Task], selector: &str) -> Option<&'a Task> {
    tasks.iter().find(|task| task.id == selector || task.text == selector)
}

async fn handle_add(store: &mut Store, selector: &str, text: Option<String>) -> Result<()> {
    let project = resolve_project(store, selector).await?;

    let text = match text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .interact_text()?,
    };
    let text = text.trim().to_string();
    if text.is_empty() {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    let task = store.add_task(&project.id, &text).await?;
    msg_success!(Message::TaskAdded(task.text));
    Ok(())
}

async fn handle_list(store: &mut Store, selector: &str) -> Result<()> {
    let project = resolve_project(store, selector).await?;
    let tasks = store.fetch_tasks(&project.id).await?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksInProject);
        return Ok(());
    }
    View::tasks(&tasks)
}

async fn handle_toggle(store: &mut Store, selector: &str, task_selector: &str, completed: bool) -> Result<()> {
    let project = resolve_project(store, selector).await?;
    let mut tasks = store.fetch_tasks(&project.id).await?;

    let task = find_task(&tasks, task_selector)
        .cloned()
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(task_selector.to_string())))?;

    store.set_task_completed(&project.id, &task.id, completed).await?;

    if completed {
        msg_success!(Message::TaskCompleted(task.text.clone()));
    } else {
        msg_success!(Message::TaskReopened(task.text.clone()));
    }

    // Reflect the mutation locally before deriving a suggestion
    for entry in tasks.iter_mut() {
        if entry.id == task.id {
            entry.completed = completed;
        }
    }

    offer_status_suggestion(store, &project, &tasks).await
}

/// The advisory loop: compute a suggestion from the updated task list and
/// let the user apply it. Declining leaves the stored status untouched.
async fn offer_status_suggestion(store: &mut Store, project: &Project, tasks: &[Task]) -> Result<()> {
    let Some(suggestion) = suggest_status_change(tasks, project.status) else {
        return Ok(());
    };

    let accepted = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(&suggestion.message)
        .default(true)
        .interact()?;
    if !accepted {
        return Ok(());
    }

    store.set_status(&project.id, suggestion.suggested).await?;
    msg_success!(Message::SuggestionApplied(suggestion.suggested.label().to_string()));
    Ok(())
}

async fn handle_delete(store: &mut Store, selector: &str, task_selector: &str) -> Result<()> {
    let project = resolve_project(store, selector).await?;
    let tasks = store.fetch_tasks(&project.id).await?;

    let task = find_task(&tasks, task_selector)
        .cloned()
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(task_selector.to_string())))?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.text.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    store.delete_task(&project.id, &task.id).await?;
    msg_success!(Message::TaskDeleted(task.text));
    Ok(())
}

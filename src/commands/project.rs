//! Project management commands.
//!
//! Covers the project lifecycle: creation with metadata prompts, list and
//! detail views with derived progress, metadata editing, deletion with
//! confirmation, and manual status selection. Status remains user
//! controlled; the progress engine only suggests transitions (see the task
//! commands).

use crate::api::Store;
use crate::libs::config::Config;
use crate::libs::date::{format_due_date, parse_due_date};
use crate::libs::messages::Message;
use crate::libs::project::{Priority, Project, Status};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde_json::json;

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a new project
    New {
        /// Priority token (Alta, Media, Baja); prompted when omitted
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// List all projects with progress and status
    List,
    /// Show project details, tasks, and ideas
    Show {
        /// Project ID or name
        project: String,
    },
    /// Edit project metadata
    Edit {
        /// Project ID or name
        project: String,
    },
    /// Delete a project and its tasks
    Delete {
        /// Project ID or name
        project: String,
    },
    /// Change the project status
    Status {
        /// Project ID or name
        project: String,
        /// Status token (pending, in_progress, completed); prompted when omitted
        status: Option<String>,
    },
}

pub async fn cmd(args: ProjectArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = Store::new(&config.backend_or_bail()?);

    match args.command {
        ProjectCommand::New { priority } => handle_new(&mut store, &config, priority.as_deref()).await,
        ProjectCommand::List => handle_list(&mut store).await,
        ProjectCommand::Show { project } => handle_show(&mut store, &project).await,
        ProjectCommand::Edit { project } => handle_edit(&mut store, &project).await,
        ProjectCommand::Delete { project } => handle_delete(&mut store, &project).await,
        ProjectCommand::Status { project, status } => handle_status(&mut store, &project, status.as_deref()).await,
    }
}

/// Finds a project by identifier or exact name.
pub(crate) async fn resolve_project(store: &mut Store, selector: &str) -> Result<Project> {
    let projects = store.fetch_projects().await?;
    projects
        .into_iter()
        .find(|project| project.id == selector || project.name == selector)
        .ok_or_else(|| msg_error_anyhow!(Message::ProjectNotFound(selector.to_string())))
}

fn prompt_priority(current: Priority, prompt: Message) -> Result<Priority> {
    let labels: Vec<&str> = Priority::ALL.iter().map(|priority| priority.label()).collect();
    let preselected = Priority::ALL.iter().position(|p| *p == current).unwrap_or(1);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .default(preselected)
        .interact()?;
    Ok(Priority::ALL[choice])
}

/// Prompts for a due date and canonicalizes it through the shared
/// format/parse pair, so whatever the user types is stored in the
/// `D/MonthName/YYYY` form.
fn prompt_due_date(default: String) -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDueDate.to_string())
        .default(default)
        .interact_text()?;
    Ok(format_due_date(&parse_due_date(&input)))
}

fn require_text(value: String) -> Result<String, &'static str> {
    if value.trim().is_empty() {
        Err("a value is required")
    } else {
        Ok(value)
    }
}

async fn handle_new(store: &mut Store, config: &Config, priority_token: Option<&str>) -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptProjectName.to_string())
        .validate_with(|input: &String| require_text(input.clone()).map(|_| ()))
        .interact_text()?;
    let client_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptClientName.to_string())
        .validate_with(|input: &String| require_text(input.clone()).map(|_| ()))
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let priority = match priority_token {
        Some(token) => {
            Priority::from_token(token).ok_or_else(|| msg_error_anyhow!(Message::UnknownPriority(token.to_string())))?
        }
        None => prompt_priority(config.defaults().priority, Message::PromptPriority)?,
    };
    let due_date = prompt_due_date(format_due_date(&Local::now().date_naive()))?;

    let project = Project {
        id: String::new(),
        name: name.trim().to_string(),
        client_name: client_name.trim().to_string(),
        description: description.trim().to_string(),
        priority,
        due_date,
        status: Status::Pending,
        ideas: Vec::new(),
    };

    let created = store.create_project(&project).await?;
    msg_success!(Message::ProjectCreated(created.name));
    Ok(())
}

async fn handle_list(store: &mut Store) -> Result<()> {
    let projects = store.fetch_projects().await?;
    if projects.is_empty() {
        msg_info!(Message::NoProjects);
        return Ok(());
    }

    let mut rows = Vec::with_capacity(projects.len());
    for project in projects {
        let tasks = store.fetch_tasks(&project.id).await?;
        rows.push((project, tasks));
    }

    msg_print!(Message::ProjectsHeader, true);
    View::projects(&rows)
}

async fn handle_show(store: &mut Store, selector: &str) -> Result<()> {
    let project = resolve_project(store, selector).await?;
    let tasks = store.fetch_tasks(&project.id).await?;

    View::project_details(&project, &tasks)
}

async fn handle_edit(store: &mut Store, selector: &str) -> Result<()> {
    let project = resolve_project(store, selector).await?;

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptProjectName.to_string())
        .default(project.name.clone())
        .validate_with(|input: &String| require_text(input.clone()).map(|_| ()))
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDescription.to_string())
        .default(project.description.clone())
        .allow_empty(true)
        .interact_text()?;
    let priority = prompt_priority(project.priority, Message::PromptPriority)?;
    let due_date = prompt_due_date(project.due_date.clone())?;

    store
        .update_project(
            &project.id,
            json!({
                "name": name.trim(),
                "description": description.trim(),
                "priority": priority.token(),
                "dueDate": due_date,
            }),
        )
        .await?;

    msg_success!(Message::ProjectUpdated(name.trim().to_string()));
    Ok(())
}

async fn handle_delete(store: &mut Store, selector: &str) -> Result<()> {
    let project = resolve_project(store, selector).await?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteProject(project.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    store.delete_project(&project.id).await?;
    msg_success!(Message::ProjectDeleted(project.name));
    Ok(())
}

async fn handle_status(store: &mut Store, selector: &str, token: Option<&str>) -> Result<()> {
    let project = resolve_project(store, selector).await?;

    let status = match token {
        Some(token) => {
            Status::from_token(token).ok_or_else(|| msg_error_anyhow!(Message::UnknownStatus(token.to_string())))?
        }
        None => {
            let labels: Vec<&str> = Status::ALL.iter().map(|status| status.label()).collect();
            let preselected = Status::ALL.iter().position(|s| *s == project.status).unwrap_or(0);
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStatus.to_string())
                .items(&labels)
                .default(preselected)
                .interact()?;
            Status::ALL[choice]
        }
    };

    store.set_status(&project.id, status).await?;
    msg_success!(Message::ProjectStatusUpdated(status.label().to_string()));
    Ok(())
}

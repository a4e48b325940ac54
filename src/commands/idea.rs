//! Idea note commands.
//!
//! Ideas are free-form notes stored as an array on the project document;
//! every mutation rewrites that array through the store.

use crate::api::Store;
use crate::commands::project::resolve_project;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::project::Idea;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use chrono::Utc;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct IdeaArgs {
    #[command(subcommand)]
    command: IdeaCommand,
}

#[derive(Debug, Subcommand)]
enum IdeaCommand {
    /// Add an idea to a project
    Add {
        /// Project ID or name
        project: String,
        /// Idea text (prompted when omitted)
        text: Option<String>,
    },
    /// List a project's ideas
    List {
        /// Project ID or name
        project: String,
    },
    /// Edit an idea
    Edit {
        /// Project ID or name
        project: String,
        /// Idea ID or exact text
        idea: String,
    },
    /// Delete an idea
    Delete {
        /// Project ID or name
        project: String,
        /// Idea ID or exact text
        idea: String,
    },
}

pub async fn cmd(args: IdeaArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = Store::new(&config.backend_or_bail()?);

    match args.command {
        IdeaCommand::Add { project, text } => handle_add(&mut store, &project, text).await,
        IdeaCommand::List { project } => handle_list(&mut store, &project).await,
        IdeaCommand::Edit { project, idea } => handle_edit(&mut store, &project, &idea).await,
        IdeaCommand::Delete { project, idea } => handle_delete(&mut store, &project, &idea).await,
    }
}

fn find_idea(ideas: &[Idea], selector: &str) -> Option<usize> {
    ideas.iter().position(|idea| idea.id == selector || idea.text == selector)
}

async fn handle_add(store: &mut Store, selector: &str, text: Option<String>) -> Result<()> {
    let mut project = resolve_project(store, selector).await?;

    let text = match text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptIdeaText.to_string())
            .interact_text()?,
    };
    let text = text.trim().to_string();
    if text.is_empty() {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    project.ideas.push(Idea {
        id: Utc::now().timestamp_millis().to_string(),
        text,
    });
    store.save_ideas(&project.id, &project.ideas).await?;

    msg_success!(Message::IdeaAdded);
    Ok(())
}

async fn handle_list(store: &mut Store, selector: &str) -> Result<()> {
    let project = resolve_project(store, selector).await?;

    if project.ideas.is_empty() {
        msg_info!(Message::NoIdeasInProject);
        return Ok(());
    }
    View::ideas(&project.ideas)
}

async fn handle_edit(store: &mut Store, selector: &str, idea_selector: &str) -> Result<()> {
    let mut project = resolve_project(store, selector).await?;

    let index = find_idea(&project.ideas, idea_selector).ok_or_else(|| msg_error_anyhow!(Message::IdeaNotFound(idea_selector.to_string())))?;

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptIdeaText.to_string())
        .default(project.ideas[index].text.clone())
        .interact_text()?;
    let text = text.trim().to_string();
    if text.is_empty() {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    project.ideas[index].text = text;
    store.save_ideas(&project.id, &project.ideas).await?;

    msg_success!(Message::IdeaUpdated);
    Ok(())
}

async fn handle_delete(store: &mut Store, selector: &str, idea_selector: &str) -> Result<()> {
    let mut project = resolve_project(store, selector).await?;

    let index = find_idea(&project.ideas, idea_selector).ok_or_else(|| msg_error_anyhow!(Message::IdeaNotFound(idea_selector.to_string())))?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteIdea.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    project.ideas.remove(index);
    store.save_ideas(&project.id, &project.ideas).await?;

    msg_success!(Message::IdeaDeleted);
    Ok(())
}

//! Display implementation for proman application messages.
//!
//! Single source of truth for all user-facing text. Each `Message` variant
//! maps to exactly one formatted string, so message wording lives in one
//! place and parameter interpolation stays type-checked.
//!
//! Status-suggestion prompts are product strings and keep their original
//! Spanish wording; everything else follows the application's English
//! console style.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === AUTH MESSAGES ===
            Message::LoginSuccess(email) => format!("Logged in as {}", email),
            Message::LoginFailed => "Login failed".to_string(),
            Message::LoggedOut => "Logged out, session removed".to_string(),
            Message::NoActiveSession => "No active session".to_string(),
            Message::WrongPassword(attempts) => format!("Authentication failed after {} attempts", attempts),
            Message::SessionExpired => "Session expired, re-authenticating".to_string(),

            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name) => format!("Project '{}' created", name),
            Message::ProjectUpdated(name) => format!("Project '{}' updated", name),
            Message::ProjectDeleted(name) => format!("Project '{}' deleted", name),
            Message::ProjectNotFound(name) => format!("Project '{}' not found", name),
            Message::ProjectStatusUpdated(label) => format!("Project status set to '{}'", label),
            Message::UnknownStatus(token) => {
                format!("Unknown status '{}'. Expected pending, in_progress, or completed", token)
            }
            Message::UnknownPriority(token) => {
                format!("Unknown priority '{}'. Expected Alta, Media, or Baja", token)
            }
            Message::ProjectsHeader => "Projects".to_string(),
            Message::NoProjects => "No projects yet. Create one with 'proman project new'".to_string(),
            Message::ConfirmDeleteProject(name) => {
                format!("Delete project '{}' and all of its tasks? This cannot be undone", name)
            }

            // === TASK MESSAGES ===
            Message::TaskAdded(text) => format!("Task '{}' added", text),
            Message::TaskCompleted(text) => format!("Task '{}' marked as completed", text),
            Message::TaskReopened(text) => format!("Task '{}' reopened", text),
            Message::TaskDeleted(text) => format!("Task '{}' deleted", text),
            Message::TaskNotFound(id) => format!("Task '{}' not found", id),
            Message::NoTasksInProject => "This project has no tasks".to_string(),
            Message::ConfirmDeleteTask(text) => format!("Delete task '{}'?", text),

            // === IDEA MESSAGES ===
            Message::IdeaAdded => "Idea saved".to_string(),
            Message::IdeaUpdated => "Idea updated".to_string(),
            Message::IdeaDeleted => "Idea deleted".to_string(),
            Message::IdeaNotFound(id) => format!("Idea '{}' not found", id),
            Message::NoIdeasInProject => "This project has no ideas".to_string(),
            Message::ConfirmDeleteIdea => "Delete this idea?".to_string(),

            // === STATUS SUGGESTION MESSAGES ===
            Message::SuggestMarkCompleted => {
                "¡Todas las tareas están completadas! ¿Quieres marcar este proyecto como \"Terminado\"?".to_string()
            }
            Message::SuggestMarkInProgress => {
                "Has comenzado a trabajar en este proyecto. ¿Quieres cambiarlo a \"En progreso\"?".to_string()
            }
            Message::SuggestionApplied(label) => format!("Status changed to '{}'", label),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::BackendNotConfigured => "Backend is not configured. Run 'proman init' first".to_string(),
            Message::ConfigModuleBackend => "Backend configuration:".to_string(),
            Message::ConfigModuleDefaults => "Project defaults:".to_string(),

            // === PROMPTS ===
            Message::PromptProjectName => "Project name".to_string(),
            Message::PromptClientName => "Client name".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptDueDate => "Due date (D/Mes/YYYY)".to_string(),
            Message::PromptStatus => "Project status".to_string(),
            Message::PromptTaskText => "Task text".to_string(),
            Message::PromptIdeaText => "Idea text".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptBackendPassword => "Enter your backend password".to_string(),
            Message::PromptBackendApiUrl => "Enter the backend API URL".to_string(),
            Message::PromptBackendApiKey => "Enter the backend API key".to_string(),
            Message::PromptDefaultPriority => "Default priority for new projects".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::DataStoragePathError => "DataStorage path error".to_string(),
        };

        write!(f, "{}", text)
    }
}

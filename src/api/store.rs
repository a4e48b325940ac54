//! Document-store client for projects, tasks, and ideas.
//!
//! Projects live in the `projects` collection; each project's tasks live in
//! the nested `projects/{id}/tasks` subcollection. Ideas are an array on
//! the project document itself. Deleting a project cascades to its tasks on
//! the server side.
//!
//! Every request carries the bearer token from [`Auth`]; a 401 response
//! drops the cached session and re-authenticates with bounded retries, the
//! same loop the rest of the session stack uses.

use super::auth::{Auth, API_KEY_HEADER};
use super::{Session, MAX_RETRY_COUNT};
use crate::libs::config::BackendConfig;
use crate::libs::messages::Message;
use crate::libs::project::{Idea, Project, Status, Task};
use crate::msg_debug;
use anyhow::Result;
use chrono::Duration;
use reqwest::{header, Client, Method, Response, StatusCode};
use serde_json::json;
use thiserror::Error;

const PROJECTS_URL: &str = "projects";

/// Typed failures from the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,
    #[error("backend returned status {0}")]
    Api(StatusCode),
}

/// REST client for the remote project store.
pub struct Store {
    client: Client,
    config: BackendConfig,
    auth: Auth,
}

impl Store {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            auth: Auth::new(config),
        }
    }

    async fn request(&mut self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<Response> {
        loop {
            let token = self.auth.get_token().await?;
            let url = format!("{}/{}", self.config.api_url, path);

            let mut req = self
                .client
                .request(method.clone(), url)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(API_KEY_HEADER, &self.config.api_key);
            if let Some(ref body) = body {
                req = req.json(body);
            }

            let res = req.send().await?;
            match res.status() {
                StatusCode::UNAUTHORIZED if self.auth.retry() < MAX_RETRY_COUNT => {
                    msg_debug!(Message::SessionExpired);
                    self.auth.drop_session()?;
                    tokio::time::sleep(Duration::seconds(1).to_std()?).await;
                    self.auth.inc_retry();
                    continue;
                }
                StatusCode::NOT_FOUND => return Err(StoreError::NotFound.into()),
                status if !status.is_success() => return Err(StoreError::Api(status).into()),
                _ => return Ok(res),
            }
        }
    }

    pub async fn fetch_projects(&mut self) -> Result<Vec<Project>> {
        let res = self.request(Method::GET, PROJECTS_URL, None).await?;
        Ok(res.json().await?)
    }

    pub async fn fetch_project(&mut self, id: &str) -> Result<Project> {
        let res = self.request(Method::GET, &format!("{}/{}", PROJECTS_URL, id), None).await?;
        Ok(res.json().await?)
    }

    /// Creates a project; the store assigns the identifier.
    pub async fn create_project(&mut self, project: &Project) -> Result<Project> {
        let res = self.request(Method::POST, PROJECTS_URL, Some(serde_json::to_value(project)?)).await?;
        Ok(res.json().await?)
    }

    /// Applies a partial update to the project document.
    pub async fn update_project(&mut self, id: &str, fields: serde_json::Value) -> Result<()> {
        self.request(Method::PATCH, &format!("{}/{}", PROJECTS_URL, id), Some(fields)).await?;
        Ok(())
    }

    pub async fn delete_project(&mut self, id: &str) -> Result<()> {
        self.request(Method::DELETE, &format!("{}/{}", PROJECTS_URL, id), None).await?;
        Ok(())
    }

    /// Persists a user-chosen project status.
    pub async fn set_status(&mut self, id: &str, status: Status) -> Result<()> {
        self.update_project(id, json!({ "status": status.token() })).await
    }

    /// Fetches a project's tasks ordered by creation time ascending.
    ///
    /// The ordering is re-applied locally so callers can rely on it even
    /// when the store does not guarantee it.
    pub async fn fetch_tasks(&mut self, project_id: &str) -> Result<Vec<Task>> {
        let path = format!("{}/{}/tasks?orderBy=createdAt", PROJECTS_URL, project_id);
        let res = self.request(Method::GET, &path, None).await?;
        let mut tasks: Vec<Task> = res.json().await?;
        tasks.sort_by_key(|task| task.created_at);
        Ok(tasks)
    }

    pub async fn add_task(&mut self, project_id: &str, text: &str) -> Result<Task> {
        let path = format!("{}/{}/tasks", PROJECTS_URL, project_id);
        let body = json!({ "text": text, "completed": false });
        let res = self.request(Method::POST, &path, Some(body)).await?;
        Ok(res.json().await?)
    }

    pub async fn set_task_completed(&mut self, project_id: &str, task_id: &str, completed: bool) -> Result<()> {
        let path = format!("{}/{}/tasks/{}", PROJECTS_URL, project_id, task_id);
        self.request(Method::PATCH, &path, Some(json!({ "completed": completed }))).await?;
        Ok(())
    }

    pub async fn delete_task(&mut self, project_id: &str, task_id: &str) -> Result<()> {
        let path = format!("{}/{}/tasks/{}", PROJECTS_URL, project_id, task_id);
        self.request(Method::DELETE, &path, None).await?;
        Ok(())
    }

    /// Replaces the idea array on the project document.
    pub async fn save_ideas(&mut self, project_id: &str, ideas: &[Idea]) -> Result<()> {
        self.update_project(project_id, json!({ "ideas": ideas })).await
    }
}

//! Email/password authentication against the backend.

use super::Session;
use crate::libs::config::BackendConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::secret::Secret;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fs;

const SESSION_FILE: &str = ".session_token";
const SECRET_FILE: &str = ".backend_secret";
const LOGIN_URL: &str = "auth/login";

/// Header carrying the application API key on every backend request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Serialize)]
struct LoginCredentials {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct AuthSession {
    token: String,
}

/// Backend authentication client.
///
/// Holds the account email from the injected [`BackendConfig`] and manages
/// the password prompt, token cache, and retry counter through the
/// [`Session`] trait.
pub struct Auth {
    client: Client,
    config: BackendConfig,
    password: Option<String>,
    retries: i32,
}

impl Auth {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            password: None,
            retries: 0,
        }
    }

    /// Removes the cached session token and password.
    ///
    /// Returns whether a session existed.
    pub fn logout(&self) -> Result<bool> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE)?;
        let existed = session_file_path.exists();
        if existed {
            fs::remove_file(session_file_path)?;
        }
        self.secret().delete()?;
        Ok(existed)
    }
}

impl Session for Auth {
    async fn login(&self) -> Result<String> {
        let credentials = LoginCredentials {
            email: self.config.email.clone(),
            password: self.password.clone().unwrap_or_default(),
        };

        let url = format!("{}/{}", self.config.api_url, LOGIN_URL);
        let res = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&credentials)
            .send()
            .await?
            .error_for_status()?;

        let session: AuthSession = res.json().await?;
        Ok(session.token)
    }

    fn set_credentials(&mut self, password: &str) -> Result<()> {
        self.password = Some(password.to_string());
        Ok(())
    }

    fn session_file(&self) -> &str {
        SESSION_FILE
    }

    fn secret(&self) -> Secret {
        Secret::new(SECRET_FILE, "Enter your backend password")
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

//! Configuration management for the proman application.
//!
//! Handles the backend connection settings and project defaults. The
//! configuration is a plain JSON file in the platform-specific application
//! data directory, loaded into an explicit [`Config`] struct that is
//! injected into the API client constructors — never read through ambient
//! global state, so the progress engine and its tests stay independent of
//! any particular configuration instance.
//!
//! ## Configuration Structure
//!
//! - **Backend**: API URL, API key, and account email for the remote
//!   document store and its authentication endpoint
//! - **Defaults**: named, documented defaults applied when creating
//!   projects (currently the default priority)
//!
//! Sensitive data is never stored here: the password lives in the
//! encrypted secret cache (`libs/secret.rs`) and the session token in its
//! own session file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use proman::libs::config::Config;
//!
//! let config = Config::read()?;
//! let backend = config.backend_or_bail()?;
//! # anyhow::Ok(())
//! ```

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::project::Priority;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Remote backend connection settings.
///
/// Supplied at startup to the `Auth` and `Store` constructors. The API key
/// identifies the application to the backend; the email identifies the
/// account being authenticated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the backend REST API, e.g. `https://api.example.com/v1`.
    pub api_url: String,
    /// Application API key sent with every request.
    pub api_key: String,
    /// Account email used for authentication.
    pub email: String,
}

impl BackendConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "backend".to_string(),
            name: "Backend".to_string(),
        }
    }

    /// Interactive setup, pre-filled from any existing configuration.
    pub fn init(existing: &Option<BackendConfig>) -> Result<Self> {
        let default = existing.clone().unwrap_or(BackendConfig {
            api_url: "".to_string(),
            api_key: "".to_string(),
            email: "".to_string(),
        });
        msg_print!(Message::ConfigModuleBackend);

        Ok(BackendConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBackendApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBackendApiKey.to_string())
                .default(default.api_key)
                .interact_text()?,
            email: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptEmail.to_string())
                .default(default.email)
                .interact_text()?,
        })
    }
}

/// Named defaults applied when creating projects.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DefaultsConfig {
    /// Priority preselected for new projects.
    pub priority: Priority,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig { priority: Priority::Medium }
    }
}

/// Root configuration object.
///
/// Each module is optional so a fresh installation works before `init` has
/// run; unconfigured modules are omitted from the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Remote backend connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,

    /// Defaults for new projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Returns the backend settings or fails with a setup hint.
    pub fn backend_or_bail(&self) -> Result<BackendConfig> {
        match &self.backend {
            Some(backend) => Ok(backend.clone()),
            None => msg_bail_anyhow!(Message::BackendNotConfigured),
        }
    }

    /// Returns the project defaults, falling back to the documented defaults.
    pub fn defaults(&self) -> DefaultsConfig {
        self.defaults.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            BackendConfig::module(),
            ConfigModule {
                key: "defaults".to_string(),
                name: "Defaults".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "backend" => config.backend = Some(BackendConfig::init(&config.backend)?),
                "defaults" => {
                    let default = config.defaults.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDefaults);

                    let labels: Vec<&str> = Priority::ALL.iter().map(|priority| priority.label()).collect();
                    let preselected = Priority::ALL.iter().position(|p| *p == default.priority).unwrap_or(1);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPriority.to_string())
                        .items(&labels)
                        .default(preselected)
                        .interact()?;

                    config.defaults = Some(DefaultsConfig {
                        priority: Priority::ALL[choice],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

//! Platform-specific application data paths.
//!
//! Configuration, cached sessions, and encrypted secrets all live in one
//! per-user application directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\proman`
//! - **macOS**: `~/Library/Application Support/proman`
//! - **Linux**: `~/.local/share/proman`

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "proman";

#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    /// Resolves a file name inside the application directory, creating the
    /// directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path).map_err(|_| msg_error_anyhow!(Message::DataStoragePathError))?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard for the backend connection and project
//! defaults. `--delete` removes the configuration file instead, resetting
//! the application to its initial state.

use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}

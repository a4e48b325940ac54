//! Backend login command.
//!
//! Establishes a session with the backend: prompts for the password when no
//! cached credential exists and stores the resulting token for subsequent
//! commands.

use crate::api::{Auth, Session};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {}

pub async fn cmd(_login_args: LoginArgs) -> Result<()> {
    let config = Config::read()?;
    let backend = config.backend_or_bail()?;

    let mut auth = Auth::new(&backend);
    auth.get_token().await?;

    msg_success!(Message::LoginSuccess(backend.email));
    Ok(())
}

//! Backend logout command.
//!
//! Removes the cached session token and the encrypted password cache so
//! the next command re-authenticates from scratch.

use crate::api::Auth;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogoutArgs {}

pub fn cmd(_logout_args: LogoutArgs) -> Result<()> {
    let config = Config::read()?;
    let backend = config.backend_or_bail()?;

    let auth = Auth::new(&backend);
    if auth.logout()? {
        msg_success!(Message::LoggedOut);
    } else {
        msg_info!(Message::NoActiveSession);
    }

    Ok(())
}

//! HTTP clients for the remote backend.
//!
//! The backend is a document-style REST service holding the `projects`
//! collection and its nested `tasks` subcollections, plus an authentication
//! endpoint issuing bearer tokens. Everything the application persists goes
//! through these clients; the progress engine itself never touches them.
//!
//! ## Session Management
//!
//! Session handling follows a cache-then-authenticate flow:
//!
//! 1. **Cache Check**: restore the token from the session file
//! 2. **Authentication Loop**: otherwise prompt for the password (cached
//!    encrypted between runs) and log in
//! 3. **Retry Logic**: bounded retries with fresh prompts on failure
//! 4. **Session Storage**: cache successful tokens for future use

use crate::libs::messages::Message;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::{msg_error, msg_error_anyhow};
use anyhow::Result;
use std::fs;
use std::io::Write;

pub mod auth;
pub mod store;

pub use auth::Auth;
pub use store::Store;

/// Maximum number of authentication retry attempts before giving up.
pub(crate) const MAX_RETRY_COUNT: i32 = 3;

/// Common session management for backend clients.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Performs authentication and returns a session token.
    async fn login(&self) -> Result<String>;

    /// Stores the password for the next authentication attempt.
    fn set_credentials(&mut self, password: &str) -> Result<()>;

    /// File name used for token storage inside the data directory.
    fn session_file(&self) -> &str;

    /// The encrypted credential store for this client.
    fn secret(&self) -> Secret;

    /// Current retry attempt count.
    fn retry(&self) -> i32;

    /// Increments the retry counter after a failed attempt.
    fn inc_retry(&mut self);

    /// Retrieves or establishes a valid session token.
    ///
    /// Restores the cached token when present; otherwise prompts for
    /// credentials and authenticates, retrying up to [`MAX_RETRY_COUNT`]
    /// times before failing.
    async fn get_token(&mut self) -> Result<String> {
        let session_file_path = DataStorage::new().get_path(self.session_file())?;
        let session_file_path = session_file_path.to_string_lossy().to_string();

        if let Ok(token) = Self::read_token(&session_file_path) {
            return Ok(token);
        }

        loop {
            // Force a fresh prompt on retry, use the cache otherwise
            let password: String = match self.retry() > 0 {
                true => self.secret().prompt()?,
                false => self.secret().get_or_prompt()?,
            };

            self.set_credentials(&password)?;

            match self.login().await {
                Ok(token) => {
                    let _ = Self::write_token(&session_file_path, &token);
                    return Ok(token);
                }
                Err(_) => {
                    if self.retry() < MAX_RETRY_COUNT {
                        msg_error!(Message::LoginFailed);
                        self.inc_retry();
                        continue;
                    }
                    break Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
            }
        }
    }

    /// Removes the cached session token, forcing re-authentication on the
    /// next request.
    fn drop_session(&self) -> Result<()> {
        let session_file_path = DataStorage::new().get_path(self.session_file())?;
        if session_file_path.exists() {
            fs::remove_file(session_file_path)?;
        }
        Ok(())
    }

    fn read_token(file_name: &str) -> Result<String> {
        Ok(fs::read_to_string(file_name)?)
    }

    fn write_token(file_name: &str, token: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(file_name)?;
        file.write_all(token.as_bytes())?;
        Ok(())
    }
}

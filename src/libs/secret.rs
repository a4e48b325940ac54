//! Encrypted on-disk cache for the backend password.
//!
//! The password used for backend authentication is cached between runs so
//! the user is not prompted on every command. It is stored AES-256-CBC
//! encrypted and base64 encoded, with keys embedded at build time (see
//! `build.rs`). A failed decrypt falls back to an interactive prompt.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

// Include build-time generated encryption keys
include!(concat!(env!("OUT_DIR"), "/app_keys.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));

        Self {
            prompt: prompt.to_owned(),
            secret_file_path,
        }
    }

    /// Returns the cached password, prompting interactively when the cache
    /// is missing or unreadable.
    pub fn get_or_prompt(&self) -> Result<String> {
        if fs::metadata(&self.secret_file_path).is_ok() {
            if let Ok(password) = self.decrypt() {
                return Ok(password);
            }
        }
        self.prompt()
    }

    /// Prompts for the password and refreshes the encrypted cache.
    pub fn prompt(&self) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.encrypt(&password)?;
        Ok(password)
    }

    /// Removes the cached secret, if any.
    pub fn delete(&self) -> Result<()> {
        if self.secret_file_path.exists() {
            fs::remove_file(&self.secret_file_path)?;
        }
        Ok(())
    }

    fn encrypt(&self, password: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(APP_ENCRYPTION_KEY, APP_ENCRYPTION_IV)?;
        let ciphertext = cipher.encrypt_vec(password.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;

        Ok(())
    }

    fn decrypt(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;

        let ciphertext = BASE64_STANDARD.decode(encoded)?;
        let cipher = Aes256Cbc::new_from_slices(APP_ENCRYPTION_KEY, APP_ENCRYPTION_IV)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;

        Ok(String::from_utf8(decrypted)?)
    }
}

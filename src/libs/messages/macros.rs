//! Convenience macros for application messaging and logging.
//!
//! The macros route every message through one of two outputs: the `tracing`
//! system when debug mode is active, or plain console output otherwise.
//! Debug mode is detected once from the environment (`PROMAN_DEBUG` or
//! `RUST_LOG`) and cached for the lifetime of the process.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//! - **`msg_error!`**: Error messages with ❌ prefix (stderr in normal mode)
//! - **`msg_error_anyhow!` / `msg_bail_anyhow!`**: Error creation and early return
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//!
//! ## Usage
//!
//! ```rust
//! use proman::{msg_info, msg_success};
//! use proman::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::NoProjects, true); // with surrounding line breaks
//! ```

use std::sync::OnceLock;

/// Cached debug-mode flag; environment variables are checked once.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns whether message output should go through `tracing`.
///
/// Debug mode is enabled when either `PROMAN_DEBUG` or `RUST_LOG` is set.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("PROMAN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}

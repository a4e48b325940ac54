//! # Proman - Project Management Assistant
//!
//! A command-line client for a remote project-management backend: create
//! projects with client, priority, and due-date metadata, track per-project
//! tasks and idea notes, and move projects through a three-stage status
//! pipeline (pending → in progress → completed).
//!
//! ## Features
//!
//! - **Project Management**: Create, list, edit, and delete projects
//! - **Task Tracking**: Per-project task lists with completion state
//! - **Progress Engine**: Completion percentage, derived status, and
//!   advisory status-change suggestions
//! - **Idea Notes**: Free-form notes attached to a project
//! - **Remote Backend**: All persistence delegated to an HTTP document store
//! - **Session Caching**: Encrypted credential and session-token storage
//!
//! ## Usage
//!
//! ```rust,no_run
//! use proman::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

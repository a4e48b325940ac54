pub mod idea;
pub mod init;
pub mod login;
pub mod logout;
pub mod project;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log in to the backend")]
    Login(login::LoginArgs),
    #[command(about = "Log out and remove the cached session")]
    Logout(logout::LogoutArgs),
    #[command(about = "Manage projects")]
    Project(project::ProjectArgs),
    #[command(about = "Manage project tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage project idea notes")]
    Idea(idea::IdeaArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        // Route message macros through tracing when debug mode is active
        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout(args) => logout::cmd(args),
            Commands::Project(args) => project::cmd(args).await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::Idea(args) => idea::cmd(args).await,
        }
    }
}

use proman::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::menu().await
}

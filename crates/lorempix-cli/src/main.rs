//! CLI entry point.
//!
//! Logging and environment loading happen once here; command dispatch
//! routes to handlers.

use clap::Parser;

use lorempix_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        lorempix_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve { port } => {
            handlers::serve::execute(port, cli.source_dir.as_deref(), cli.public_dir.as_deref())
                .await?;
        }
        Commands::Paths => {
            handlers::paths::execute(cli.source_dir.as_deref(), cli.public_dir.as_deref())?;
        }
    }

    Ok(())
}

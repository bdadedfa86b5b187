//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the placeholder image server.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "lorempix")]
#[command(about = "Serve randomly picked, resized placeholder images")]
#[command(version)]
pub struct Cli {
    /// Override the source image directory for this invocation
    #[arg(long = "source-dir", global = true)]
    pub source_dir: Option<PathBuf>,

    /// Override the public output directory for this invocation
    #[arg(long = "public-dir", global = true)]
    pub public_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "lorempix",
            "--source-dir",
            "/tmp/sources",
            "--public-dir",
            "/tmp/public",
            "paths",
        ]);
        assert_eq!(cli.source_dir, Some(PathBuf::from("/tmp/sources")));
        assert_eq!(cli.public_dir, Some(PathBuf::from("/tmp/public")));
        assert!(matches!(cli.command, Some(Commands::Paths)));
    }

    #[test]
    fn test_serve_port_defaults_to_3000() {
        let cli = Cli::parse_from(["lorempix", "serve"]);
        let Some(Commands::Serve { port }) = cli.command else {
            panic!("expected the serve command");
        };
        assert_eq!(port, 3000);
    }
}

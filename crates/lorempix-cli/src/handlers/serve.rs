//! Serve command handler.
//!
//! Builds the server configuration from CLI arguments and runs the Axum
//! adapter until interrupted.

use std::path::Path;

use anyhow::Result;

use lorempix_axum::{ServerConfig, start_server};

/// Execute the serve command.
pub async fn execute(
    port: u16,
    source_dir: Option<&Path>,
    public_dir: Option<&Path>,
) -> Result<()> {
    let mut config = ServerConfig::with_defaults();
    config.port = port;
    if let Some(dir) = source_dir {
        config = config.with_source_dir(dir);
    }
    if let Some(dir) = public_dir {
        config = config.with_public_dir(dir);
    }

    println!();
    println!("  lorempix server starting...");
    println!();
    println!("  Local:   http://localhost:{port}");
    println!("  Network: http://0.0.0.0:{port}");
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}

//! Paths command handler.
//!
//! Displays the resolved directory layout for diagnostics and debugging.
//! This is the "golden truth" tool for path resolution issues.

use std::path::Path;

use anyhow::Result;

use lorempix_core::paths::ResolvedPaths;

/// Execute the paths command.
///
/// Resolves and displays the directories in `key = value` format, honoring
/// the same overrides the server itself would use.
pub fn execute(source_dir: Option<&Path>, public_dir: Option<&Path>) -> Result<()> {
    let paths = ResolvedPaths::resolve_with_overrides(source_dir, public_dir)?;
    println!("{paths}");
    Ok(())
}

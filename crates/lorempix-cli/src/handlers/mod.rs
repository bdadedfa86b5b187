//! Command handlers for the CLI.
//!
//! Each submodule implements one subcommand.

pub mod paths;
pub mod serve;

//! Command implementations for gen-slaves.
//!
//! This module resolves the fleet config shared by every command and routes
//! the parsed CLI command to its handler.

mod check;
mod generate;
mod list;


use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. A missing
/// subcommand runs `generate` with default arguments.
pub fn dispatch(mut cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.take_command() {
        Command::Generate(args) => generate::cmd_generate(config, args),
        Command::List => list::cmd_list(&config),
        Command::Check(args) => check::cmd_check(config, args),
    }
}

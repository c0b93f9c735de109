//! CLI argument parsing for gen-slaves.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// gen-slaves: render one Kubernetes manifest per CI build worker.
///
/// Every worker in the fleet gets a `<name>.yaml` file rendered from a
/// single template with `{{.Name}}` bound to the worker name.
/// Running without a subcommand is the same as `gen-slaves generate`.
#[derive(Parser, Debug)]
#[command(name = "gen-slaves")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Fleet config (YAML) replacing the built-in worker list and paths.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for gen-slaves.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render and write every worker configuration.
    ///
    /// Stops at the first file that cannot be opened, rendered or closed.
    Generate(GenerateArgs),

    /// List configured workers and their output paths.
    List,

    /// Parse the template and dry-render it for every worker.
    ///
    /// Nothing is written to disk.
    Check(CheckArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Template file to render.
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Directory to write `<name>.yaml` files into.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Template file to check.
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, defaulting to `generate`.
    pub fn take_command(&mut self) -> Command {
        self.command
            .take()
            .unwrap_or_else(|| Command::Generate(GenerateArgs::default()))
    }
}

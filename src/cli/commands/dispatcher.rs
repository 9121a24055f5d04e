//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::OutputFormat;

use super::check::CheckCommand;
use super::completions::CompletionsCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    python: Option<String>,
    format: OutputFormat,
    colors: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher from the global options.
    pub fn new(python: Option<String>, format: OutputFormat, colors: bool) -> Self {
        Self {
            python,
            format,
            colors,
        }
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, runs `check`.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => {
                let cmd = CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
            Some(Commands::Check) | None => {
                let cmd = CheckCommand::new(self.python.clone(), self.format, self.colors);
                cmd.execute(out)
            }
        }
    }
}

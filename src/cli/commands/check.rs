//! Check command implementation.
//!
//! The `installcheck check` command (also the default) probes the Python
//! interpreter and each library, then prints one line per probe. Missing
//! libraries are reported, never treated as a failure.

use std::io::Write;

use crate::error::Result;
use crate::probe::{EnvironmentProbe, Report};
use crate::ui::{Output, OutputFormat, Theme};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    python: Option<String>,
    format: OutputFormat,
    colors: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(python: Option<String>, format: OutputFormat, colors: bool) -> Self {
        Self {
            python,
            format,
            colors,
        }
    }

    /// Write an already-collected report.
    pub fn write(&self, report: &Report, out: &mut dyn Write) -> Result<CommandResult> {
        let mut output = Output::new(out, Theme::for_terminal(self.colors));
        output.write_report(report, self.format)?;

        tracing::debug!(
            "Checked {} probes, {} missing",
            report.outcomes().count(),
            report.missing_count()
        );

        Ok(CommandResult::success())
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let report = EnvironmentProbe::run(self.python.as_deref());
        self.write(&report, out)
    }
}

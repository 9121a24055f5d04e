//! Output format and report writer.

use std::io::Write;

use crate::error::Result;
use crate::probe::Report;

use super::theme::Theme;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per probe.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Writes reports to any [`Write`] sink.
pub struct Output<W: Write> {
    writer: W,
    theme: Theme,
}

impl<W: Write> Output<W> {
    /// Create a new output writer.
    pub fn new(writer: W, theme: Theme) -> Self {
        Self { writer, theme }
    }

    /// Write a report in the given format.
    pub fn write_report(&mut self, report: &Report, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => {
                for outcome in report.outcomes() {
                    writeln!(self.writer, "{}", self.theme.format_outcome(outcome))?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, &report.record())?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer and return the sink.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

//! The probe loop.
//!
//! Probes run one after another in the fixed order: the runtime first,
//! then every entry of [`CAPABILITIES`]. A probe that fails for any reason
//! becomes a "not found" outcome; nothing here returns an error.

use std::iter;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::capability::{Capability, CAPABILITIES, RUNTIME_NAME};
use super::interpreter::{extract_version, PythonInterpreter, ScriptRunner};
use super::status::{OutcomeRecord, ProbeOutcome, ProbeStatus};
use crate::error::{InstallCheckError, Result};

/// Prints the interpreter's full version string on one line.
pub const RUNTIME_SCRIPT: &str = "import sys; print(sys.version.replace('\\n', ' '))";

/// Exit code the module script uses when the import raises `ImportError`.
pub const EXIT_MODULE_MISSING: i32 = 3;

/// Imports `argv[1]` and prints its version, falling back to the metadata
/// of distribution `argv[2]`. Anything the module prints while importing
/// goes to stderr, so the version is the only stdout line.
pub const MODULE_SCRIPT: &str = r#"import contextlib, importlib, sys
name, dist = sys.argv[1], sys.argv[2]
try:
    with contextlib.redirect_stdout(sys.stderr):
        module = importlib.import_module(name)
except ImportError:
    sys.exit(3)
version = getattr(module, "__version__", None)
if not version:
    try:
        from importlib import metadata
        version = metadata.version(dist)
    except Exception:
        version = None
print(version or "unknown")
"#;

/// The outcome of a full run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Interpreter that was probed, if one was found.
    pub interpreter: Option<PathBuf>,
    /// When the probes ran.
    pub checked_at: DateTime<Utc>,
    /// Runtime probe outcome.
    pub runtime: ProbeOutcome,
    /// Library probe outcomes, in [`CAPABILITIES`] order.
    pub capabilities: Vec<ProbeOutcome>,
}

impl Report {
    /// All outcomes in report order, runtime first.
    pub fn outcomes(&self) -> impl Iterator<Item = &ProbeOutcome> {
        iter::once(&self.runtime).chain(self.capabilities.iter())
    }

    /// One line per probe.
    pub fn lines(&self) -> Vec<String> {
        self.outcomes().map(ProbeOutcome::line).collect()
    }

    /// Number of probes that did not find their capability.
    pub fn missing_count(&self) -> usize {
        self.outcomes().filter(|o| !o.status.is_found()).count()
    }

    /// Short `major.minor.patch` form of the runtime version.
    pub fn python_version(&self) -> Option<String> {
        self.runtime.status.version().and_then(extract_version)
    }

    /// Serializable view of the report.
    pub fn record(&self) -> ReportRecord<'_> {
        ReportRecord {
            interpreter: self
                .interpreter
                .as_ref()
                .map(|p| p.display().to_string()),
            python_version: self.python_version(),
            checked_at: self.checked_at,
            probes: self.outcomes().map(OutcomeRecord::from).collect(),
        }
    }
}

/// JSON form of a [`Report`].
#[derive(Debug, Serialize)]
pub struct ReportRecord<'a> {
    pub interpreter: Option<String>,
    pub python_version: Option<String>,
    pub checked_at: DateTime<Utc>,
    pub probes: Vec<OutcomeRecord<'a>>,
}

/// Runs every probe against an interpreter.
pub struct EnvironmentProbe;

impl EnvironmentProbe {
    /// Locate an interpreter and probe it.
    ///
    /// When no interpreter can be found the report still has one outcome
    /// per probe, all of them "not found".
    pub fn run(explicit: Option<&str>) -> Report {
        match PythonInterpreter::locate(explicit) {
            Ok(python) => Self::run_with(&python),
            Err(err) => {
                tracing::warn!("{}", err);
                Self::without_interpreter(&err)
            }
        }
    }

    /// Probe using the given runner.
    pub fn run_with(runner: &dyn ScriptRunner) -> Report {
        tracing::debug!("Probing interpreter {}", runner.program().display());

        let runtime = probe_runtime(runner);
        let capabilities = CAPABILITIES
            .iter()
            .map(|cap| probe_capability(runner, cap))
            .collect();

        Report {
            interpreter: Some(runner.program().to_path_buf()),
            checked_at: Utc::now(),
            runtime,
            capabilities,
        }
    }

    /// Build the report for a machine with no usable interpreter.
    pub fn without_interpreter(err: &InstallCheckError) -> Report {
        let reason = err.to_string();
        let runtime = ProbeOutcome {
            name: RUNTIME_NAME.to_string(),
            module: None,
            missing_message: reason.clone(),
            status: ProbeStatus::NotFound {
                reason: Some(reason.clone()),
            },
        };
        let capabilities = CAPABILITIES
            .iter()
            .map(|cap| missing(cap, Some(reason.clone())))
            .collect();

        Report {
            interpreter: None,
            checked_at: Utc::now(),
            runtime,
            capabilities,
        }
    }
}

/// Probe the interpreter's own version.
pub fn probe_runtime(runner: &dyn ScriptRunner) -> ProbeOutcome {
    let status = match runtime_version(runner) {
        Ok(version) => ProbeStatus::Found { version },
        Err(err) => {
            tracing::debug!("Runtime probe failed: {}", err);
            ProbeStatus::NotFound {
                reason: Some(err.to_string()),
            }
        }
    };

    ProbeOutcome {
        name: RUNTIME_NAME.to_string(),
        module: None,
        missing_message: format!(
            "{} version not found ({})",
            RUNTIME_NAME,
            runner.program().display()
        ),
        status,
    }
}

/// Probe one library.
pub fn probe_capability(runner: &dyn ScriptRunner, cap: &Capability) -> ProbeOutcome {
    match module_version(runner, cap) {
        Ok(version) => {
            tracing::debug!("{} found: {}", cap.module, version);
            ProbeOutcome {
                name: cap.name.to_string(),
                module: Some(cap.module.to_string()),
                missing_message: cap.missing_message.to_string(),
                status: ProbeStatus::Found { version },
            }
        }
        Err(InstallCheckError::ModuleMissing { .. }) => {
            tracing::debug!("{} is not installed", cap.module);
            missing(cap, None)
        }
        Err(err) => {
            tracing::debug!("{} probe failed: {}", cap.module, err);
            missing(cap, Some(err.to_string()))
        }
    }
}

fn missing(cap: &Capability, reason: Option<String>) -> ProbeOutcome {
    ProbeOutcome {
        name: cap.name.to_string(),
        module: Some(cap.module.to_string()),
        missing_message: cap.missing_message.to_string(),
        status: ProbeStatus::NotFound { reason },
    }
}

fn runtime_version(runner: &dyn ScriptRunner) -> Result<String> {
    let output = runner.run_script(RUNTIME_SCRIPT, &[])?;
    if !output.success() {
        return Err(script_failure(output.code, &output.stderr));
    }
    last_line(&output.stdout).ok_or_else(|| InstallCheckError::EmptyOutput {
        probe: RUNTIME_NAME.to_string(),
    })
}

fn module_version(runner: &dyn ScriptRunner, cap: &Capability) -> Result<String> {
    let output = runner.run_script(MODULE_SCRIPT, &[cap.module, cap.distribution])?;
    match output.code {
        Some(0) => last_line(&output.stdout).ok_or_else(|| InstallCheckError::EmptyOutput {
            probe: cap.module.to_string(),
        }),
        Some(EXIT_MODULE_MISSING) => Err(InstallCheckError::ModuleMissing {
            module: cap.module.to_string(),
        }),
        code => Err(script_failure(code, &output.stderr)),
    }
}

/// Keep the last stderr line; for a Python traceback that is the exception.
fn script_failure(code: Option<i32>, stderr: &str) -> InstallCheckError {
    let stderr = stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
        .to_string();
    InstallCheckError::ScriptFailed { code, stderr }
}

/// The version is printed last, after anything that slipped past the
/// stdout redirect.
fn last_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(String::from)
}

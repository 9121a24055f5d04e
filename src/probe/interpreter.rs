//! Python interpreter discovery and script execution.
//!
//! A native binary cannot import Python modules, so every probe is a short
//! script run by the interpreter whose environment is being checked. This
//! module finds that interpreter and runs scripts with it.
//!
//! Discovery order:
//!
//! 1. An explicit `--python` value (path or bare name)
//! 2. `$VIRTUAL_ENV`'s interpreter, when a virtual environment is active
//! 3. The first `python3` or `python` on `PATH`
//!
//! # Example
//!
//! ```no_run
//! use installcheck::probe::interpreter::{PythonInterpreter, ScriptRunner};
//!
//! let python = PythonInterpreter::locate(None).unwrap();
//! let out = python.run_script("import sys; print(sys.version)", &[]).unwrap();
//! println!("{}", out.stdout.trim());
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{InstallCheckError, Result};

/// Interpreter names tried on `PATH`, in order.
#[cfg(windows)]
pub const PYTHON_CANDIDATES: &[&str] = &["python", "python3"];

/// Interpreter names tried on `PATH`, in order.
#[cfg(not(windows))]
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Interpreter location inside a virtual environment.
#[cfg(windows)]
const VENV_PYTHON: &str = "Scripts/python.exe";

#[cfg(not(windows))]
const VENV_PYTHON: &str = "bin/python";

/// Output captured from a probe script.
#[derive(Debug, Clone, Default)]
pub struct ScriptOutput {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl ScriptOutput {
    /// Whether the script exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs Python snippets.
///
/// The probe loop only talks to the interpreter through this trait so it
/// can be driven without a real Python in tests.
pub trait ScriptRunner {
    /// Path of the interpreter, for reporting.
    fn program(&self) -> &Path;

    /// Run `script` as `python -c <script> <args...>` and capture its output.
    fn run_script(&self, script: &str, args: &[&str]) -> Result<ScriptOutput>;
}

/// A Python interpreter on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInterpreter {
    path: PathBuf,
}

impl PythonInterpreter {
    /// Wrap an interpreter path without checking it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate an interpreter using the real environment and `PATH`.
    pub fn locate(explicit: Option<&str>) -> Result<Self> {
        Self::locate_with_env(explicit, |key: &str| std::env::var(key), &parse_system_path())
    }

    /// Locate an interpreter with a custom env var lookup and `PATH`.
    ///
    /// An explicit value never falls back to the other sources: if the user
    /// named an interpreter, that is the one whose environment matters.
    pub fn locate_with_env<F>(
        explicit: Option<&str>,
        env_fn: F,
        path_entries: &[PathBuf],
    ) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        if let Some(value) = explicit {
            tracing::debug!("Using explicit interpreter: {}", value);
            return locate_explicit(value, path_entries)
                .map(Self::new)
                .ok_or_else(|| InstallCheckError::InterpreterNotFound {
                    tried: value.to_string(),
                });
        }

        let mut tried = Vec::new();

        if let Ok(venv) = env_fn("VIRTUAL_ENV") {
            let candidate = PathBuf::from(venv).join(VENV_PYTHON);
            if candidate.is_file() && is_executable(&candidate) {
                tracing::debug!("Using virtualenv interpreter: {}", candidate.display());
                return Ok(Self::new(candidate));
            }
            tried.push(candidate.display().to_string());
        }

        for name in PYTHON_CANDIDATES {
            if let Some(path) = resolve_executable(name, path_entries) {
                tracing::debug!("Found {} on PATH: {}", name, path.display());
                return Ok(Self::new(path));
            }
            tried.push((*name).to_string());
        }

        Err(InstallCheckError::InterpreterNotFound {
            tried: tried.join(", "),
        })
    }

    /// Path to the interpreter executable.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScriptRunner for PythonInterpreter {
    fn program(&self) -> &Path {
        &self.path
    }

    fn run_script(&self, script: &str, args: &[&str]) -> Result<ScriptOutput> {
        let output = Command::new(&self.path)
            .arg("-c")
            .arg(script)
            .args(args)
            .env("PYTHONIOENCODING", "utf-8")
            .output()
            .map_err(|source| InstallCheckError::Spawn {
                program: self.path.clone(),
                source,
            })?;

        Ok(ScriptOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Resolve an explicit `--python` value: a path if it has a separator,
/// otherwise a name to look up on `PATH`.
fn locate_explicit(value: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let as_path = Path::new(value);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        return (as_path.is_file() && is_executable(as_path)).then(|| as_path.to_path_buf());
    }
    resolve_executable(value, path_entries)
}

/// Look a bare executable name up on `PATH`, adding `.exe` on Windows.
fn resolve_executable(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if cfg!(windows) && Path::new(name).extension().is_none() {
        if let Some(found) = resolve_tool_path(&format!("{}.exe", name), path_entries) {
            return Some(found);
        }
    }
    resolve_tool_path(name, path_entries)
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does not use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Extract a dotted version number from free-form version text.
///
/// `"3.12.1 (main, Dec  8 2023) [GCC 13.2.0]"` becomes `"3.12.1"`.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v?(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

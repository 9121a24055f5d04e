//! Error types for installcheck.
//!
//! This module defines [`InstallCheckError`], the error type used by the
//! probes and commands, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are typed so they can be logged and reported, but the
//!   probe loop folds every one of them into a "not found" status
//! - Use `anyhow::Error` (via `InstallCheckError::Other`) for unexpected errors
//! - Only failures to write the report reach `main` and change the exit code

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installcheck operations.
#[derive(Debug, Error)]
pub enum InstallCheckError {
    /// No Python interpreter could be located.
    #[error("Python interpreter not found (tried: {tried})")]
    InterpreterNotFound { tried: String },

    /// The interpreter process could not be started.
    #[error("Failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The module is not importable by the interpreter.
    #[error("Module '{module}' is not importable")]
    ModuleMissing { module: String },

    /// The probe script exited unsuccessfully for a reason other than a
    /// missing module.
    #[error("Probe script exited with code {code:?}: {stderr}")]
    ScriptFailed { code: Option<i32>, stderr: String },

    /// The probe script succeeded but printed nothing usable.
    #[error("Probe for '{probe}' produced no version output")]
    EmptyOutput { probe: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for installcheck operations.
pub type Result<T> = std::result::Result<T, InstallCheckError>;

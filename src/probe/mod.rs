//! Interpreter and library probing.
//!
//! This module answers one question per capability: can the Python
//! interpreter import it, and which version does it report?
//!
//! # Modules
//!
//! - [`capability`] - The fixed, ordered list of libraries to probe
//! - [`interpreter`] - Interpreter discovery and script execution
//! - [`runner`] - The probe loop and the resulting report
//! - [`status`] - Probe status types

pub mod capability;
pub mod interpreter;
pub mod runner;
pub mod status;

pub use capability::{Capability, CAPABILITIES, RUNTIME_NAME};
pub use interpreter::{PythonInterpreter, ScriptOutput, ScriptRunner};
pub use runner::{EnvironmentProbe, Report};
pub use status::{ProbeOutcome, ProbeStatus, NOT_FOUND_MARKER};

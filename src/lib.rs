//! installcheck - Check that a Python test environment is installed.
//!
//! installcheck reports the version of the Python interpreter and of the
//! libraries an acceptance-test suite needs (Robot Framework, Browser,
//! requests, CryptoLibrary). Each probe prints exactly one line, and a
//! missing library is reported rather than treated as an error.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Interpreter discovery and library probes
//! - [`ui`] - Report rendering
//!
//! # Example
//!
//! ```no_run
//! use installcheck::probe::EnvironmentProbe;
//!
//! let report = EnvironmentProbe::run(None);
//! for line in report.lines() {
//!     println!("{}", line);
//! }
//! ```

pub mod cli;
pub mod error;
pub mod probe;
pub mod ui;

pub use error::{InstallCheckError, Result};

//! Probe status types.
//!
//! Each probe produces a `ProbeOutcome` that describes whether a
//! capability is available and, if so, which version was reported.

use serde::Serialize;

/// Marker that every "not found" line contains.
pub const NOT_FOUND_MARKER: &str = "not found";

/// The result of probing a single capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// Capability is importable and reported a version.
    Found {
        /// Non-empty version string.
        version: String,
    },

    /// Capability could not be loaded.
    NotFound {
        /// Why the lookup failed, when something more specific than a plain
        /// `ImportError` happened.
        reason: Option<String>,
    },
}

impl ProbeStatus {
    /// Whether the capability was found.
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeStatus::Found { .. })
    }

    /// The reported version, if found.
    pub fn version(&self) -> Option<&str> {
        match self {
            ProbeStatus::Found { version } => Some(version),
            ProbeStatus::NotFound { .. } => None,
        }
    }
}

/// The result of one probe, ready to be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Display name of the probed capability.
    pub name: String,
    /// Python import name; `None` for the runtime probe.
    pub module: Option<String>,
    /// Line to print when the capability is missing.
    pub missing_message: String,
    /// The status of the capability.
    pub status: ProbeStatus,
}

impl ProbeOutcome {
    /// The single report line for this probe.
    pub fn line(&self) -> String {
        match &self.status {
            ProbeStatus::Found { version } => format!("{}: {}", self.name, version),
            ProbeStatus::NotFound { .. } => self.missing_message.clone(),
        }
    }
}

/// Serialized form of a probe outcome in the JSON report.
#[derive(Debug, Serialize)]
pub struct OutcomeRecord<'a> {
    pub name: &'a str,
    pub module: Option<&'a str>,
    pub found: bool,
    pub version: Option<&'a str>,
    pub reason: Option<&'a str>,
}

impl<'a> From<&'a ProbeOutcome> for OutcomeRecord<'a> {
    fn from(outcome: &'a ProbeOutcome) -> Self {
        let reason = match &outcome.status {
            ProbeStatus::NotFound { reason } => reason.as_deref(),
            ProbeStatus::Found { .. } => None,
        };
        Self {
            name: &outcome.name,
            module: outcome.module.as_deref(),
            found: outcome.status.is_found(),
            version: outcome.status.version(),
            reason,
        }
    }
}

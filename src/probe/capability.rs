//! The fixed list of libraries to probe.

/// A Python library the test suite depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Name shown in the report (e.g., "Robot Framework").
    pub name: &'static str,
    /// Import name passed to `importlib.import_module`.
    pub module: &'static str,
    /// Distribution name, used when the module has no `__version__`.
    pub distribution: &'static str,
    /// Line printed when the module cannot be imported.
    pub missing_message: &'static str,
}

/// Display name of the runtime probe.
pub const RUNTIME_NAME: &str = "Python";

/// Libraries probed after the runtime, in report order.
pub const CAPABILITIES: &[Capability] = &[
    Capability {
        name: "Robot Framework",
        module: "robot",
        distribution: "robotframework",
        missing_message: "robot module not found",
    },
    Capability {
        name: "Browser",
        module: "Browser",
        distribution: "robotframework-browser",
        missing_message: "Browser module not found",
    },
    Capability {
        name: "requests",
        module: "requests",
        distribution: "requests",
        missing_message: "RequestsLibrary or requests module not found",
    },
    Capability {
        name: "CryptoLibrary",
        module: "CryptoLibrary",
        distribution: "robotframework-crypto",
        missing_message: "CryptoLibrary module not found",
    },
];

/// Total number of probes in a report, runtime included.
pub fn probe_count() -> usize {
    CAPABILITIES.len() + 1
}

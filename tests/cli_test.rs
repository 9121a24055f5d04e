//! Integration tests for the installcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Base command with a clean, predictable environment.
fn installcheck() -> Command {
    let mut cmd = Command::new(cargo_bin("installcheck"));
    cmd.env_remove("INSTALLCHECK_PYTHON")
        .env_remove("VIRTUAL_ENV")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Write a stand-in interpreter that reports `installed` modules.
///
/// It answers `python -c <script>` with a version string and
/// `python -c <script> <module> <dist>` with the module's version, or
/// exits 3 (the probe's "module missing" code) for anything else.
#[cfg(unix)]
fn fake_python(dir: &std::path::Path, name: &str, installed: &[(&str, &str)]) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let mut cases = String::new();
    for (module, version) in installed {
        cases.push_str(&format!("  {}) echo \"{}\" ;;\n", module, version));
    }
    let script = format!(
        "#!/bin/sh\n\
         if [ -z \"$3\" ]; then\n  echo \"3.12.1 (main, Dec  8 2023, 05:40:51) [GCC 13.2.0]\"\n  exit 0\nfi\n\
         case \"$3\" in\n{}  *) exit 3 ;;\nesac\n",
        cases
    );

    let path = dir.join(name);
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    installcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python test environment"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    installcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_format() -> Result<(), Box<dyn std::error::Error>> {
    installcheck().args(["--format", "xml"]).assert().code(2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn all_libraries_present() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(
        temp.path(),
        "python3",
        &[
            ("robot", "7.0"),
            ("Browser", "18.3.0"),
            ("requests", "2.31.0"),
            ("CryptoLibrary", "0.4.2"),
        ],
    );

    let output = installcheck().arg("--python").arg(&python).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Python: 3.12.1 (main, Dec  8 2023, 05:40:51) [GCC 13.2.0]",
            "Robot Framework: 7.0",
            "Browser: 18.3.0",
            "requests: 2.31.0",
            "CryptoLibrary: 0.4.2",
        ]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn only_runtime_present() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), "python3", &[]);

    let output = installcheck().arg("--python").arg(&python).output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Python: 3.12.1"));
    assert_eq!(lines[1], "robot module not found");
    assert_eq!(lines[2], "Browser module not found");
    assert_eq!(lines[3], "RequestsLibrary or requests module not found");
    assert_eq!(lines[4], "CryptoLibrary module not found");
    Ok(())
}

#[cfg(unix)]
#[test]
fn only_http_client_present() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), "python3", &[("requests", "2.31.0")]);

    let output = installcheck()
        .args(["check", "--python"])
        .arg(&python)
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Python: "));
    assert!(lines[1].contains("not found"));
    assert!(lines[2].contains("not found"));
    assert_eq!(lines[3], "requests: 2.31.0");
    assert!(lines[4].contains("not found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn interpreter_found_on_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fake_python(temp.path(), "python3", &[("robot", "7.0")]);

    installcheck()
        .env("PATH", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Robot Framework: 7.0"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn interpreter_from_environment_variable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), "py", &[("Browser", "18.3.0")]);

    installcheck()
        .env("INSTALLCHECK_PYTHON", &python)
        .assert()
        .success()
        .stdout(predicate::str::contains("Browser: 18.3.0"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn json_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = fake_python(temp.path(), "python3", &[("requests", "2.31.0")]);

    let output = installcheck()
        .args(["--format", "json", "--python"])
        .arg(&python)
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let probes = json["probes"].as_array().unwrap();
    assert_eq!(probes.len(), 5);
    assert_eq!(json["python_version"], "3.12.1");
    assert_eq!(probes[3]["version"], "2.31.0");
    assert_eq!(probes[1]["found"], false);
    Ok(())
}

#[test]
fn missing_interpreter_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let output = installcheck().env("PATH", temp.path()).output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Python interpreter not found"));
    assert!(lines.iter().all(|l| l.contains("not found")));
    Ok(())
}

#[test]
fn logs_stay_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let output = installcheck()
        .arg("--debug")
        .env("PATH", temp.path())
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 5);
    assert!(!String::from_utf8(output.stderr)?.is_empty());
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    installcheck()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("installcheck"));
    Ok(())
}

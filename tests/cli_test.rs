//! Integration tests for the `has` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[cfg(unix)]
mod fake_tools {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    /// Write an executable `#!/bin/sh` script named `name` into `dir`.
    pub fn install(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// A bin directory with stand-ins for git, curl and node.
    pub fn toolbox() -> TempDir {
        let temp = TempDir::new().unwrap();
        install(
            temp.path(),
            "git",
            r#"[ "$1" = "--version" ] && echo "git version 2.43.0" || exit 129"#,
        );
        install(
            temp.path(),
            "curl",
            r#"[ "$1" = "--version" ] && printf 'curl 8.5.0 (x86_64-pc-linux-gnu)\nRelease-Date: 2023-12-06\n' || exit 2"#,
        );
        install(
            temp.path(),
            "node",
            r#"[ "$1" = "-e" ] && echo "v20.11.1" || exit 9"#,
        );
        temp
    }
}

fn has() -> Command {
    let mut cmd = Command::new(cargo_bin("has"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    for flag in ["-v", "--version"] {
        has()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
    Ok(())
}

#[test]
fn cli_version_skips_resolution() -> Result<(), Box<dyn std::error::Error>> {
    has()
        .env("PATH", "")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("command not found").not());
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    has()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("has git curl node"));
    Ok(())
}

#[test]
fn cli_no_args_prints_usage_and_fails() -> Result<(), Box<dyn std::error::Error>> {
    has()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_unknown_flag_fails() -> Result<(), Box<dyn std::error::Error>> {
    has()
        .args(["--bogus", "git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
    Ok(())
}

#[test]
fn cli_builtin_is_found_without_probe() -> Result<(), Box<dyn std::error::Error>> {
    has()
        .env("PATH", "")
        .arg("cd")
        .assert()
        .code(0)
        .stdout("✓ cd shell builtin\n");
    Ok(())
}

#[test]
fn cli_missing_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    has()
        .env("PATH", "")
        .arg("nonexistentcmd123")
        .assert()
        .code(1)
        .stdout("✗ nonexistentcmd123 command not found\n");
    Ok(())
}

#[test]
fn cli_exit_code_counts_missing_names() -> Result<(), Box<dyn std::error::Error>> {
    has()
        .env("PATH", "")
        .args(["missing-a", "cd", "missing-b"])
        .assert()
        .code(2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_reports_versions_and_failures_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let bin = fake_tools::toolbox();
    has()
        .env("PATH", bin.path())
        .args(["git", "curl", "node", "nonexistentcmd123"])
        .assert()
        .code(1)
        .stdout(concat!(
            "✓ git version 2.43.0\n",
            "✓ curl 8.5.0 (x86_64-pc-linux-gnu)\n",
            "✓ node v20.11.1\n",
            "✗ nonexistentcmd123 command not found\n",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_output_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let bin = fake_tools::toolbox();
    let run = || {
        has()
            .env("PATH", bin.path())
            .args(["node", "missing", "git", "type"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_hanging_probe_is_bounded() -> Result<(), Box<dyn std::error::Error>> {
    let bin = tempfile::TempDir::new()?;
    fake_tools::install(bin.path(), "stuck", "sleep 30");

    // The script itself needs `sleep` from the system directories.
    let path = format!("{}:/usr/bin:/bin", bin.path().display());

    let start = std::time::Instant::now();
    has()
        .env("PATH", path)
        .args(["--timeout", "200", "stuck"])
        .assert()
        .success()
        .stdout("✓ stuck version unknown\n");
    assert!(start.elapsed() < std::time::Duration::from_secs(20));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_background_child_does_not_stall_report() -> Result<(), Box<dyn std::error::Error>> {
    let bin = tempfile::TempDir::new()?;
    fake_tools::install(
        bin.path(),
        "daemonish",
        "sleep 30 &\necho 'daemonish 1.0'",
    );
    let path = format!("{}:/usr/bin:/bin", bin.path().display());

    let start = std::time::Instant::now();
    has()
        .env("PATH", path)
        .args(["--timeout", "300", "daemonish"])
        .assert()
        .success()
        .stdout("✓ daemonish 1.0\n");
    assert!(start.elapsed() < std::time::Duration::from_secs(10));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let bin = fake_tools::toolbox();
    let output = has()
        .env("PATH", bin.path())
        .args(["--format", "json", "git", "cd", "nope"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["results"][0]["version"], "version 2.43.0");
    assert_eq!(json["results"][1]["kind"], "builtin");
    assert_eq!(json["results"][2]["status"], "missing");
    assert_eq!(json["summary"]["missing"], 1);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_debug_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let bin = fake_tools::toolbox();
    has()
        .env("PATH", bin.path())
        .args(["--debug", "git"])
        .assert()
        .success()
        .stdout("✓ git version 2.43.0\n")
        .stderr(predicate::str::contains("Resolved 'git'"));
    Ok(())
}

//! End-to-end tests running the `buildgate` binary against a controlled PATH.
//!
//! Each test builds its own search path in a temp dir. A fake `cargo` there
//! appends its arguments to `invocations.log` in the working directory, so
//! the log line count is the number of builds that ran.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_buildgate");

struct Host {
    bin_dir: TempDir,
    work_dir: TempDir,
}

impl Host {
    fn new() -> Self {
        Self {
            bin_dir: tempfile::tempdir().unwrap(),
            work_dir: tempfile::tempdir().unwrap(),
        }
    }

    #[cfg(unix)]
    fn with_fake_cargo(exit_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let host = Self::new();
        let cargo = host.bin_dir.path().join("cargo");
        std::fs::write(
            &cargo,
            format!("#!/bin/sh\necho \"$@\" >> invocations.log\nexit {exit_code}\n"),
        )
        .unwrap();
        std::fs::set_permissions(&cargo, std::fs::Permissions::from_mode(0o755)).unwrap();
        host
    }

    fn dispatch(&self) -> Output {
        Command::new(BIN)
            .env("PATH", self.bin_dir.path())
            .env_remove("RUST_LOG")
            .current_dir(self.work_dir.path())
            .output()
            .unwrap()
    }

    fn invocations(&self) -> Vec<String> {
        read_lines(&self.work_dir.path().join("invocations.log"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

#[test]
#[cfg(unix)]
fn toolchain_present_build_succeeds() {
    let host = Host::with_fake_cargo(0);

    let output = host.dispatch();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(host.invocations(), vec!["build --release".to_string()]);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("prebuilt"));
}

#[test]
#[cfg(unix)]
fn toolchain_present_build_fails() {
    let host = Host::with_fake_cargo(1);

    let output = host.dispatch();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(host.invocations().len(), 1);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("prebuilt"));
    // The failure is reported by the exit code alone.
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
#[cfg(unix)]
fn build_exit_code_is_mirrored() {
    let host = Host::with_fake_cargo(101);

    let output = host.dispatch();

    assert_eq!(output.status.code(), Some(101));
    assert_eq!(host.invocations().len(), 1);
}

#[test]
fn toolchain_absent_falls_back_to_prebuilt() {
    let host = Host::new();

    let output = host.dispatch();
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("not found"));
    assert!(stdout.contains("prebuilt"));
    assert!(host.invocations().is_empty());
}

#[test]
#[cfg(unix)]
fn repeated_runs_take_the_same_branch() {
    let present = Host::with_fake_cargo(0);
    let absent = Host::new();

    for _ in 0..3 {
        assert_eq!(present.dispatch().status.code(), Some(0));
        let fallback = absent.dispatch();
        assert_eq!(fallback.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&fallback.stdout).contains("prebuilt"));
    }

    assert_eq!(present.invocations().len(), 3);
    assert!(absent.invocations().is_empty());
}

#[test]
#[cfg(unix)]
fn unstartable_toolchain_reports_os_error() {
    use std::os::unix::fs::PermissionsExt;

    // Executable bit set but no interpreter: found by the probe, refused by exec.
    let host = Host::new();
    let cargo = host.bin_dir.path().join("cargo");
    std::fs::write(&cargo, "#!/nonexistent/interpreter\n").unwrap();
    std::fs::set_permissions(&cargo, std::fs::Permissions::from_mode(0o755)).unwrap();

    let output = host.dispatch();

    assert_eq!(output.status.code(), Some(71));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to start cargo"));
    assert!(String::from_utf8(output.stdout).unwrap().is_empty());
}

#[test]
fn rejects_arguments() {
    let host = Host::new();

    let output = Command::new(BIN)
        .arg("--release")
        .env("PATH", host.bin_dir.path())
        .current_dir(host.work_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(host.invocations().is_empty());
}

//! Isolated environment for running the `avro-decorator` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Temp home directory; the binary never sees the real `~`.
pub struct TestEnv {
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Where the binary keeps endpoints inside this environment.
    pub fn properties_path(&self) -> PathBuf {
        self.home_dir.path().join(".kafka-avro-decorator.properties")
    }

    pub fn write_properties(&self, content: &str) {
        std::fs::write(self.properties_path(), content).unwrap();
    }

    pub fn read_properties(&self) -> String {
        std::fs::read_to_string(self.properties_path()).unwrap()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, b"")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &[u8]) -> TestResult {
        let mut child = Command::new(env!("CARGO_BIN_EXE_avro-decorator"))
            .args(args)
            .env("AVRO_DECORATOR_HOME", self.home_dir.path())
            .env_remove("AVRO_DECORATOR_PROPERTIES")
            .env_remove("AVRO_DECORATOR_LOG")
            .env_remove("VISUAL")
            .env("EDITOR", "true")
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        if let Some(mut input) = child.stdin.take() {
            input.write_all(stdin).unwrap();
        }
        child.wait_with_output().unwrap().into()
    }
}

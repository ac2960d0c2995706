//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Availability rows of the reference scenario, deliberately unsorted.
#[allow(dead_code)]
pub const SAMPLE_VLANS: &str = "\
device_id,primary_port,vlan_id
0,1,8
3,1,1
0,1,2
0,1,5
0,0,2
1,0,6
1,0,8
2,1,8
";

/// Test environment with an isolated home directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for input and output files
/// - `HOME` pointing into it, so no user config is picked up
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the vlanport binary.
    ///
    /// VLANPORT_* variables are cleared and `HOME` is redirected to the
    /// temporary directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vlanport").expect("Failed to find vlanport binary");
        cmd.env("HOME", &self.temp_path)
            .env_remove("VLANPORT_LOG_MODE")
            .env_remove("VLANPORT_CONFIG")
            .env_remove("VLANPORT_DELIMITER")
            .env_remove("VLANPORT_OUTPUT_FORMAT");
        cmd
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write raw bytes under the temporary directory and return the path.
    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Path of a file under the temporary directory (not created).
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }

    /// Write the reference availability file.
    pub fn sample_vlans(&self) -> PathBuf {
        self.write_file("vlans.csv", SAMPLE_VLANS)
    }

    /// Run `vlanport run` and return the output file contents.
    ///
    /// # Panics
    /// Panics if the command fails or the output file is missing.
    pub fn run_ok(&self, vlans: &Path, requests: &Path) -> String {
        let output = self.path("output.csv");
        let result = self
            .command()
            .arg("run")
            .arg(vlans)
            .arg(requests)
            .arg(&output)
            .output()
            .expect("Failed to run vlanport");

        assert!(
            result.status.success(),
            "run failed: {}",
            String::from_utf8_lossy(&result.stderr)
        );

        std::fs::read_to_string(output).expect("Output file was not written")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

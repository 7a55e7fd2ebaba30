//! Test support utilities for ghostpass integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory and workspace. No
/// process-global state is mutated; child processes get `GHOSTPASS_HOME`
/// and `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Working directory for commands (corpus and output files)
    pub dir: TempDir,
    /// Workspace directory, passed as GHOSTPASS_HOME
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    ///
    /// Writes a `config.toml` with cheap key derivation so tests stay fast.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        fs::write(home.path().join("config.toml"), CHEAP_CONFIG).expect("failed to write config");

        Self { dir, home }
    }

    /// Create a test environment with one store initialized.
    pub fn init(name: &str) -> Self {
        let t = Self::new();
        let output = t.init_cmd(name, MASTER_KEY);
        assert!(
            output.status.success(),
            "Failed to initialize store: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a store holding `fields` as (service, username, password).
    pub fn with_fields(name: &str, fields: &[(&str, &str, &str)]) -> Self {
        let t = Self::init(name);
        for (service, username, password) in fields {
            let output = t.add(name, MASTER_KEY, service, username, password);
            assert!(
                output.status.success(),
                "Failed to add field {}: {}",
                service,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of a store file in the workspace.
    pub fn store_path(&self, name: &str) -> PathBuf {
        self.home.path().join(format!("{}.gp", name))
    }

    /// Path of a store's lock marker.
    pub fn lock_path(&self, name: &str) -> PathBuf {
        self.home.path().join(format!("{}.gp.lock", name))
    }

    /// Write a file into the working directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Read a file from the working directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("failed to read test file")
    }
}

//! Command helper methods for Test.
//!
//! Secrets and confirmations are piped through stdin, one per line, in
//! the order the command asks for them.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a ghostpass command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - GHOSTPASS_HOME set to the temporary workspace
    /// - HOME set to the same directory
    /// - Current directory set to the test working directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ghostpass").expect("failed to find ghostpass binary");
        cmd.env("GHOSTPASS_HOME", self.home.path());
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env_remove("GHOSTPASS_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd.arg("--no-banner");
        cmd
    }

    /// Shortcut for `ghostpass init`.
    pub fn init_cmd(&self, name: &str, key: &str) -> Output {
        self.cmd()
            .args(["init", "--name", name])
            .write_stdin(format!("{}\n", key))
            .output()
            .expect("failed to run ghostpass init")
    }

    /// Shortcut for `ghostpass stores`.
    pub fn stores(&self) -> Output {
        self.cmd()
            .arg("stores")
            .output()
            .expect("failed to run ghostpass stores")
    }

    /// Shortcut for `ghostpass add` with every value given.
    pub fn add(&self, name: &str, key: &str, service: &str, username: &str, password: &str) -> Output {
        self.cmd()
            .args(["add", "--name", name, "--service", service, "--username", username])
            .write_stdin(format!("{}\n{}\n", key, password))
            .output()
            .expect("failed to run ghostpass add")
    }

    /// Shortcut for `ghostpass rm`.
    pub fn rm(&self, name: &str, key: &str, service: &str) -> Output {
        self.cmd()
            .args(["rm", "--name", name, "--service", service])
            .write_stdin(format!("{}\n", key))
            .output()
            .expect("failed to run ghostpass rm")
    }

    /// Shortcut for `ghostpass view`.
    pub fn view(&self, name: &str, key: &str, service: &str) -> Output {
        self.cmd()
            .args(["view", "--name", name, "--service", service])
            .write_stdin(format!("{}\n", key))
            .output()
            .expect("failed to run ghostpass view")
    }

    /// Shortcut for `ghostpass fields`.
    pub fn fields(&self, name: &str, key: &str) -> Output {
        self.cmd()
            .args(["fields", "--name", name])
            .write_stdin(format!("{}\n", key))
            .output()
            .expect("failed to run ghostpass fields")
    }

    /// Shortcut for `ghostpass destruct`, answering the confirmation.
    pub fn destruct(&self, name: &str, key: &str, answer: &str) -> Output {
        self.cmd()
            .args(["destruct", "--name", name])
            .write_stdin(format!("{}\n{}\n", key, answer))
            .output()
            .expect("failed to run ghostpass destruct")
    }

    /// Shortcut for `ghostpass export` to an explicit output file.
    pub fn export(&self, name: &str, key: &str, corpus: &Path, outfile: &Path) -> Output {
        self.cmd()
            .args(["export", "--name", name, "--corpus"])
            .arg(corpus)
            .arg("--outfile")
            .arg(outfile)
            .write_stdin(format!("{}\n", key))
            .output()
            .expect("failed to run ghostpass export")
    }

    /// Shortcut for `ghostpass import`, answering a possible replace prompt.
    pub fn import(&self, key: &str, corpus: &Path, answer: &str) -> Output {
        self.cmd()
            .args(["import", "--corpus"])
            .arg(corpus)
            .write_stdin(format!("{}\n{}\n", key, answer))
            .output()
            .expect("failed to run ghostpass import")
    }
}

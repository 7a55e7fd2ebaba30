//! Completions command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
        }
    }
}

/// Print completions for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write(shell, &mut std::io::stdout())
}

fn write(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(CompletionShell::from(shell), &mut cmd, "ghostpass", out);
    Ok(())
}

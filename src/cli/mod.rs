//! Command-line interface.
//!
//! Each command opens what it needs through a [`Workspace`], prompts for
//! the master key, and talks to the store through
//! [`StoreManager`](crate::core::store::StoreManager).

pub mod add;
pub mod banner;
pub mod completions;
pub mod destruct;
pub mod export;
pub mod fields;
pub mod import;
pub mod init;
pub mod output;
pub mod prompt;
pub mod remove;
pub mod stores;
pub mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::workspace::Workspace;
use crate::error::Result;

/// Ghostpass - A privacy-first secrets manager.
#[derive(Parser)]
#[command(
    name = "ghostpass",
    about = "Privacy-first secrets manager that hides stores in plain sight",
    version,
    after_help = "Your secrets, hidden in plain sight. 👻"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip ASCII art banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a new secret store
    Init {
        /// Name of the secret store to create
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List existing secret stores
    Stores,

    /// Permanently delete a secret store
    Destruct {
        /// Name of the secret store to delete
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Add a field to a secret store, overwriting after confirmation
    Add {
        /// Name of the secret store
        #[arg(short, long)]
        name: Option<String>,
        /// Service that identifies the field
        #[arg(short, long)]
        service: Option<String>,
        /// Username for the service
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Remove a field from a secret store
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the secret store
        #[arg(short, long)]
        name: Option<String>,
        /// Service that identifies the field
        #[arg(short, long)]
        service: Option<String>,
    },

    /// Decrypt and view a single field
    View {
        /// Name of the secret store
        #[arg(short, long)]
        name: Option<String>,
        /// Service that identifies the field
        #[arg(short, long)]
        service: Option<String>,
    },

    /// List all fields in a secret store
    Fields {
        /// Name of the secret store
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Import a secret store from a plainsight file
    Import {
        /// Path to a previously exported plainsight file
        #[arg(short, long)]
        corpus: PathBuf,
    },

    /// Hide a secret store inside a carrier text for distribution
    Export {
        /// Name of the secret store
        #[arg(short, long)]
        name: Option<String>,
        /// Path to the carrier text
        #[arg(short, long)]
        corpus: PathBuf,
        /// Output path (default: plainsight_<name>.out)
        #[arg(short, long)]
        outfile: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command against `workspace`.
pub fn execute(command: Command, workspace: &Workspace) -> Result<()> {
    use Command::*;

    // An absent --name becomes "", which the engine rejects as NameRequired.
    let name = |n: Option<String>| n.unwrap_or_default();

    match command {
        Init { name: n } => init::execute(workspace, &name(n)),
        Stores => stores::execute(workspace),
        Destruct { name: n } => destruct::execute(workspace, &name(n)),
        Add {
            name: n,
            service,
            username,
        } => add::execute(workspace, &name(n), service, username),
        Remove { name: n, service } => remove::execute(workspace, &name(n), service),
        View { name: n, service } => view::execute(workspace, &name(n), service),
        Fields { name: n } => fields::execute(workspace, &name(n)),
        Import { corpus } => import::execute(workspace, &corpus),
        Export {
            name: n,
            corpus,
            outfile,
        } => export::execute(workspace, &name(n), &corpus, outfile),
        Completions { shell } => completions::execute(shell),
    }
}

//! Export command.
//!
//! Hide an encrypted copy of a store inside a carrier text.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::constants;
use crate::core::plainsight;
use crate::core::store::StoreManager;
use crate::core::validation;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Export `name` into `corpus`, writing the result to `outfile`.
///
/// Defaults to `plainsight_<name>.out` in the current directory.
pub fn execute(
    workspace: &Workspace,
    name: &str,
    corpus: &Path,
    outfile: Option<PathBuf>,
) -> Result<()> {
    info!("Exporting store: {}", name);
    validation::validate_name(name)?;

    let text = fs::read_to_string(corpus)?;
    let text = text.trim();
    let outfile = outfile.unwrap_or_else(|| PathBuf::from(constants::default_outfile(name)));

    let store = workspace.open(name, prompt::master_key()?)?;
    let encoded = store.export(text)?;
    fs::write(&outfile, encoded)?;

    output::success(&format!(
        "wrote plainsight file to {}",
        output::path(outfile.display())
    ));
    output::kv("capacity:", format!("{} bytes", plainsight::capacity(text)));
    Ok(())
}

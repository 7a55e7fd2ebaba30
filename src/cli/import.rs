//! Import command.
//!
//! Recover a store from a plainsight file and write it to the workspace.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::store::StoreManager;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Import a store hidden in `corpus`.
///
/// Replacing a local store of the same name asks for confirmation.
pub fn execute(workspace: &Workspace, corpus: &Path) -> Result<()> {
    info!("Importing store from: {}", corpus.display());

    let text = fs::read_to_string(corpus)?;
    let master_key = prompt::master_key()?;
    let mut store = workspace.import(master_key, text.trim())?;
    let name = store.name().to_string();

    if workspace.exists(&name) {
        output::warn(&format!(
            "a local store named {} already exists",
            output::key(&name)
        ));
        if !prompt::confirm("Replace it?")? {
            output::dimmed("aborted");
            return Ok(());
        }
    }

    store.commit()?;
    let count = store.get_fields()?.len();
    output::success(&format!(
        "imported {} ({} field{})",
        output::key(&name),
        count,
        if count == 1 { "" } else { "s" }
    ));
    Ok(())
}

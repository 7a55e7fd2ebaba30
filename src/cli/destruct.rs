//! Destruct command.
//!
//! Permanently delete a secret store after confirmation.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::store::StoreManager;
use crate::core::validation;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Destroy a store. Requires its master key.
pub fn execute(workspace: &Workspace, name: &str) -> Result<()> {
    info!("Destroying store: {}", name);
    validation::validate_name(name)?;

    output::header(&format!("Destroying secret store {}", output::key(name)));
    let mut store = workspace.open(name, prompt::master_key()?)?;

    output::warn("this permanently deletes the store and every field in it");
    if !prompt::confirm("Are you sure? This cannot be undone")? {
        output::dimmed("aborted");
        return Ok(());
    }

    store.destroy()?;
    output::success(&format!("destroyed {}", output::key(name)));
    Ok(())
}

//! Stores command.
//!
//! List the secret stores in the workspace.

use crate::cli::output;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// List all stores.
pub fn execute(workspace: &Workspace) -> Result<()> {
    let stores = workspace.stores()?;

    if stores.is_empty() {
        output::dimmed("no secret stores");
        output::hint(&format!(
            "run: {}",
            output::cmd("ghostpass init --name <name>")
        ));
        return Ok(());
    }

    output::header(&format!("Secret stores ({})", stores.len()));
    output::rule();
    for name in &stores {
        output::list_item(&output::key(name));
    }
    Ok(())
}
